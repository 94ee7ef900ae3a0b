//! Cache domain - keys for the model instance cache

mod key;

pub use key::ModelCacheKey;

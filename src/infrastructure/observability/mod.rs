//! Observability infrastructure - model resolution metrics

mod metrics;

pub use metrics::{
    record_cache_hit, record_cache_miss, record_construction, record_resolution_error,
};

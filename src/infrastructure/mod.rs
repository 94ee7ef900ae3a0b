//! Infrastructure layer - External service implementations

pub mod logging;
pub mod model;
pub mod observability;
pub mod registry;
pub mod services;
pub mod storage;

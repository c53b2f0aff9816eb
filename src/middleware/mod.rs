// src/middleware/mod.rs
// DOCUMENTATION: Admission control applied before routing
// PURPOSE: Re-export middleware components

pub mod cors;
pub mod rate_limit;

pub use cors::{admission, OriginPolicy};
pub use rate_limit::{rate_limit, start_cleanup_task, ClientRateLimiter};

// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod resource_service;
pub mod seed;

pub use resource_service::*;
pub use seed::*;

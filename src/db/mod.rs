// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export data store components

#[cfg(test)]
pub mod memory_store;
pub mod postgrest;
pub mod store;

#[cfg(test)]
pub use memory_store::InMemoryStore;
pub use postgrest::*;
pub use store::*;

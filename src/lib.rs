// src/lib.rs
// DOCUMENTATION: Library root shared by the HTTP server and the seed binary
// PURPOSE: REST gateway for the studio website over a hosted database

#[cfg(test)]
#[macro_use]
mod test_support;

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

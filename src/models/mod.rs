// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod booking;
pub mod contact;
pub mod gallery;
pub mod resource;
pub mod testimonial;

pub use booking::*;
pub use contact::*;
pub use gallery::*;
pub use resource::*;
pub use testimonial::*;

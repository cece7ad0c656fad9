// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod artist_service;
pub mod drink_service;
pub mod listing;
pub mod quiz;
pub mod show_service;
pub mod trivia_service;
pub mod venue_service;

pub use artist_service::*;
pub use drink_service::*;
pub use show_service::*;
pub use trivia_service::*;
pub use venue_service::*;

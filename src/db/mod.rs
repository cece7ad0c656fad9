// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod artist_repository;
pub mod drink_repository;
pub mod question_repository;
pub mod show_repository;
pub mod venue_repository;

pub use artist_repository::*;
pub use drink_repository::*;
pub use question_repository::*;
pub use show_repository::*;
pub use venue_repository::*;

// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod artist;
pub mod drink;
pub mod genres;
pub mod listing;
pub mod pagination;
pub mod show;
pub mod trivia;
pub mod validation;
pub mod venue;

pub use artist::*;
pub use drink::*;
pub use genres::*;
pub use listing::*;
pub use pagination::*;
pub use show::*;
pub use trivia::*;
pub use validation::*;
pub use venue::*;

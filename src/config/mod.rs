// src/config/mod.rs
// Environment-driven settings and the database pool

pub mod db;
pub mod env;

pub use db::init_db_pool;
pub use env::Config;

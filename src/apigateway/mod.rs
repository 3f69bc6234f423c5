pub mod api;
pub mod error;
pub mod patch;
pub mod server;
pub mod state;
pub mod types;
pub mod validate;

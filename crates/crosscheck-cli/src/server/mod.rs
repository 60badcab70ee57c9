//! HTTP API for uploading, editing, validating and exporting tables.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::ServerConfig;

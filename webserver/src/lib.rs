//! Webserver for the CRM duplicate merge engine
//!
//! Thin HTTP glue: a merge endpoint the browser form posts to, a status
//! endpoint, and static file serving for the form itself. All merge logic
//! lives in the dedupe crate.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use webserver_impl::WebServer;

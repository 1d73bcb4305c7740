//! Minimal in-memory URL shortener
//!
//! `POST /shorten` issues a hexadecimal short key for a URL and
//! `GET /{short_key}` answers with a permanent redirect to it.

pub mod api_doc;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

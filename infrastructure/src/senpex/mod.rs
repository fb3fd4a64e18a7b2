//! Senpex REST API adapter

mod client;

pub use client::{DEFAULT_TIMEOUT, SenpexClientError, SenpexHttpClient};

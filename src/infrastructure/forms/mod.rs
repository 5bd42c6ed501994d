//! Form collector adapter.

mod client;

pub use client::{DEFAULT_ENDPOINT_URL, FormEndpointClient};

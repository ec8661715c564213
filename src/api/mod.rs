//! HTTP boundary for the Remy analysis service.

pub mod client;
pub mod error;
pub mod types;

pub use client::RemyApiClient;
pub use error::ApiError;

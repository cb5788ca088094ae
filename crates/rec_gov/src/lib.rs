//! # RecGov
//!
//! This crate provides a client for the Rec.gov internal availability API, which reports
//! per-campsite availability for one campground and one calendar month at a time.

/// Constants describing the upstream availability endpoint.
pub mod constants;

/// Payload and error types for the availability API.
mod types;
pub use types::*;

/// HTTP client for the monthly availability endpoint.
mod client;
pub use client::*;

//! API client module
//!
//! HTTP client for the InterProScan 5 REST service.

pub mod client;
pub mod endpoints;
pub mod form;
pub mod xml;

pub use client::ApiClient;

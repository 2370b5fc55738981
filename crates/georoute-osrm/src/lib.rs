//! georoute OSRM - external routing provider
//!
//! Talks to an OSRM-compatible `route` and `nearest` service and normalizes its
//! answers into [`georoute_core::RouteResponse`].

pub mod client;

pub use client::{OsrmClient, DEFAULT_BASE_URL};

//! Shared library surface for the georoute server and its tests.

pub mod api;
pub mod config;
pub mod resolver;
pub mod state;

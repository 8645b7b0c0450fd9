//! API
//!
//! Client for the Hum Studios JSON API.

pub mod client;

pub use client::*;

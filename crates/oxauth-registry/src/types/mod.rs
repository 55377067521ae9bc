//! Domain types for the client registry.

pub mod client;

pub use client::Client;

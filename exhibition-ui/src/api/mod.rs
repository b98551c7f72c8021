//! Content retrieval

pub mod client;

pub use client::fetch_exhibition;

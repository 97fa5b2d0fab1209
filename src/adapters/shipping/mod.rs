//! Shipping provider adapter.

mod client;

pub use client::HttpShippingProvider;

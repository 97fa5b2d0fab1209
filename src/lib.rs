//! Merchant Gateway - tenant merchant-profile backend
//!
//! Fronts a document store of tenant merchant profiles, proxies payment-intent
//! and shipper-account creation to external providers, and accepts signed
//! webhook callbacks from the payments provider.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;

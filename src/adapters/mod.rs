//! Adapters: implementations of the ports plus the HTTP edge.

pub mod http;
pub mod memory;
pub mod oauth;
pub mod payment;
pub mod shipping;

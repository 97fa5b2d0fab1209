//! Payments provider adapter.

mod gateway;

pub use gateway::HttpPaymentGateway;

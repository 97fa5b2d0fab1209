//! Merchant profile domain model.

mod model;

pub use model::{MerchantId, MerchantProfile, MerchantStatus};

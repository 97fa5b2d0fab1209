//! Merchant CRUD endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateMerchantRequest, MerchantResponse, UpdateMerchantRequest};
pub use routes::routes;

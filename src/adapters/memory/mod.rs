//! In-memory document store adapter.

mod merchant_repository;

pub use merchant_repository::InMemoryMerchantRepository;

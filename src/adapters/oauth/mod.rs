//! OAuth client-credentials adapter: token endpoint client and cache.

mod token_cache;
mod token_endpoint;

pub use token_cache::TokenCache;
pub use token_endpoint::HttpTokenEndpoint;

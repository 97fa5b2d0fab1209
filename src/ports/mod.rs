//! Ports: async traits at the seams between domain logic and the outside
//! world. Adapters implement them; handlers consume them as `Arc<dyn _>`.

mod clock;
mod merchant_repository;
mod payment_gateway;
mod shipping_provider;
mod token;

pub use clock::{Clock, ManualClock, SystemClock};
pub use merchant_repository::{MerchantRepository, RepositoryError};
pub use payment_gateway::{
    CheckoutSession, CreateCheckoutSessionRequest, CreatePaymentIntentRequest, GatewayError,
    PaymentGateway, PaymentIntent,
};
pub use shipping_provider::{
    RegisterShipperRequest, ShipperAccount, ShippingError, ShippingProvider,
};
pub use token::{IssuedToken, TokenEndpoint, UpstreamAuthError};

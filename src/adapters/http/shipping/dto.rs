//! Request/response DTOs for shipping proxy endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::ShipperAccount;

/// Request body for registering a shipper account.
#[derive(Debug, Deserialize)]
pub struct RegisterShipperBody {
    pub carrier: String,
    pub account_name: String,
    pub account_number: String,
    pub country: String,
}

/// Shipper account as relayed to the API caller.
#[derive(Debug, Serialize)]
pub struct ShipperAccountResponse {
    pub id: String,
    pub carrier: String,
    pub status: String,
}

impl From<ShipperAccount> for ShipperAccountResponse {
    fn from(account: ShipperAccount) -> Self {
        Self {
            id: account.id,
            carrier: account.carrier,
            status: account.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_body_deserializes() {
        let body: RegisterShipperBody = serde_json::from_str(
            r#"{"carrier":"ups","account_name":"Acme UPS","account_number":"A1B2","country":"US"}"#,
        )
        .unwrap();
        assert_eq!(body.carrier, "ups");
        assert_eq!(body.country, "US");
    }
}

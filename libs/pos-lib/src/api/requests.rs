use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use crate::entities::{Id, Role, SessionUser};

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

fn expose_optional<S: Serializer>(
    secret: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Body of `POST /users`.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Id>,
}

/// Body of `PUT /users/:id`. The password is only sent when it changes.
#[derive(Debug, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(
        serialize_with = "expose_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierInput {
    pub name: String,
    pub contact: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub category_id: Id,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub barcode: String,
}

/// Body of `POST /stock/add` and `POST /stock/remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockMovement {
    pub product_id: Id,
    pub quantity: u32,
}

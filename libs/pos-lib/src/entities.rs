use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier shared by every backend entity.
pub type Id = i64;

/// Staff role. The wire form is the snake_case name (`staff_admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    StaffAdmin,
    Staff,
    Kasir,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::StaffAdmin, Role::Staff, Role::Kasir];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::StaffAdmin => "staff_admin",
            Role::Staff => "staff",
            Role::Kasir => "kasir",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::StaffAdmin => "Staff Admin",
            Role::Staff => "Staff",
            Role::Kasir => "Kasir",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Profile of the logged-in user as returned by `POST /users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Owner account, set when a staff_admin created this user.
    #[serde(default)]
    pub created_by: Option<Id>,
    #[serde(default)]
    pub created_by_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<Id>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub barcode: String,
    /// Derived by the server from stock movements; never sent back.
    #[serde(default)]
    pub stock: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Id,
    pub name: String,
    pub contact: String,
    pub address: String,
    #[serde(default)]
    pub created_by: Option<Id>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    Add,
    Remove,
}

impl fmt::Display for StockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockDirection::Add => f.write_str("add"),
            StockDirection::Remove => f.write_str("remove"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTransaction {
    pub id: Id,
    pub product_id: Id,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    #[serde(alias = "type")]
    pub direction: StockDirection,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

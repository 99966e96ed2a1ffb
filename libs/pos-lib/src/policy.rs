//! Role → capability table. Navigation and every page's actions read from
//! here; nothing else decides what a role may do.

use std::fmt;

use crate::entities::Role;
use crate::errors::PosError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Dashboard,
    ManageUsers,
    ManageSuppliers,
    ManageStock,
    ManageProducts,
    ManageCategories,
    Transactions,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Capability::Dashboard => "open the dashboard",
            Capability::ManageUsers => "manage users",
            Capability::ManageSuppliers => "manage suppliers",
            Capability::ManageStock => "manage stock",
            Capability::ManageProducts => "manage products",
            Capability::ManageCategories => "manage categories",
            Capability::Transactions => "open transactions",
        };
        f.write_str(s)
    }
}

use Capability::*;

const ADMIN: &[Capability] = &[Dashboard, ManageUsers];
const STAFF_ADMIN: &[Capability] = &[
    Dashboard,
    ManageUsers,
    ManageSuppliers,
    ManageStock,
    ManageProducts,
    ManageCategories,
    Transactions,
];
const STAFF: &[Capability] = &[
    Dashboard,
    ManageSuppliers,
    ManageStock,
    ManageProducts,
    ManageCategories,
    Transactions,
];
const KASIR: &[Capability] = &[Dashboard, Transactions];

pub fn capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Admin => ADMIN,
        Role::StaffAdmin => STAFF_ADMIN,
        Role::Staff => STAFF,
        Role::Kasir => KASIR,
    }
}

pub fn allows(role: Role, capability: Capability) -> bool {
    capabilities(role).contains(&capability)
}

pub fn require(role: Role, capability: Capability) -> Result<(), PosError> {
    if allows(role, capability) {
        Ok(())
    } else {
        tracing::debug!(%role, %capability, "capability denied");
        Err(PosError::Forbidden { role, capability })
    }
}

/// Roles an account of `role` may hand out when creating or editing users.
pub fn assignable_roles(role: Role) -> &'static [Role] {
    match role {
        Role::Admin => &Role::ALL,
        Role::StaffAdmin => &[Role::Staff, Role::Kasir],
        Role::Staff | Role::Kasir => &[],
    }
}

/// Whether accounts of `role` can be owned by a staff_admin.
pub fn can_have_owner(role: Role) -> bool {
    matches!(role, Role::Staff | Role::Kasir)
}

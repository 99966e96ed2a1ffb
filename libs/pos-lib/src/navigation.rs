use crate::entities::Role;
use crate::policy::{self, Capability};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub capability: Capability,
    pub label: &'static str,
    pub path: &'static str,
}

const ENTRIES: &[MenuEntry] = &[
    MenuEntry { capability: Capability::Dashboard, label: "Dashboard", path: "/" },
    MenuEntry { capability: Capability::ManageUsers, label: "Users", path: "/users" },
    MenuEntry { capability: Capability::ManageSuppliers, label: "Suppliers", path: "/suppliers" },
    MenuEntry { capability: Capability::ManageStock, label: "Stock", path: "/stock" },
    MenuEntry { capability: Capability::ManageProducts, label: "Products", path: "/products" },
    MenuEntry { capability: Capability::ManageCategories, label: "Categories", path: "/categories" },
    MenuEntry { capability: Capability::Transactions, label: "Transactions", path: "/transactions" },
];

/// Menu entries visible to `role`, in display order.
pub fn menu(role: Role) -> Vec<MenuEntry> {
    ENTRIES
        .iter()
        .filter(|entry| policy::allows(role, entry.capability))
        .copied()
        .collect()
}

pub fn entry_for_path(path: &str) -> Option<MenuEntry> {
    ENTRIES.iter().find(|e| e.path == path).copied()
}

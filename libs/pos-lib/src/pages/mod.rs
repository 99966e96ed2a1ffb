//! Resource pages. Each one lists a backend collection and exposes the
//! mutations its role is allowed; every successful mutation is followed by
//! exactly one reload so the view always mirrors the server.

pub mod categories;
pub mod products;
pub mod stock;
pub mod suppliers;
pub mod users;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::PosError;
use crate::policy::Capability;

pub use categories::{CategoriesPage, CategoryForm};
pub use products::{ProductForm, ProductsPage};
pub use stock::{StockForm, StockPage};
pub use suppliers::{SupplierForm, SuppliersPage};
pub use users::{UserForm, UsersPage};

/// Asks the operator before a destructive call.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Fixed answer, for `--yes` style flags and tests.
#[derive(Debug, Clone, Copy)]
pub struct Preconfirmed(pub bool);

#[async_trait]
impl Confirm for Preconfirmed {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    /// The operator declined; no request was sent.
    Cancelled,
}

#[async_trait]
pub trait ResourcePage: Send {
    type Item: Send + Sync;

    /// Capability the viewer needs to open the page at all.
    const CAPABILITY: Capability;

    /// Fetches the page's collection(s) from the server.
    async fn load(&mut self) -> Result<(), PosError>;

    fn items(&self) -> &[Self::Item];

    /// Number of completed loads, the initial one included.
    fn load_count(&self) -> usize;

    /// Resynchronization step run after every successful mutation.
    async fn after_mutation(&mut self) -> Result<(), PosError> {
        debug!(capability = ?Self::CAPABILITY, "reloading after mutation");
        self.load().await
    }
}

pub(crate) async fn confirm_delete(confirm: &dyn Confirm, noun: &str, label: &str) -> bool {
    let prompt = format!("Delete {noun} \"{label}\"?");
    let accepted = confirm.confirm(&prompt).await;
    if !accepted {
        debug!(noun, label, "deletion declined");
    }
    accepted
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{confirm_delete, Confirm, Deletion, ResourcePage};
use crate::api::{PosApi, SupplierInput};
use crate::entities::{Id, SessionUser, Supplier};
use crate::errors::PosError;
use crate::guard::AuthGuard;
use crate::policy::Capability;
use crate::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub contact: String,
    pub address: String,
}

impl SupplierForm {
    fn validate(&self) -> Result<SupplierInput, PosError> {
        let [name, contact, address] = validation::all_required([
            ("name", self.name.as_str()),
            ("contact", self.contact.as_str()),
            ("address", self.address.as_str()),
        ])?;
        Ok(SupplierInput {
            name,
            contact,
            address,
        })
    }
}

pub struct SuppliersPage<A: PosApi> {
    api: Arc<A>,
    viewer: SessionUser,
    suppliers: Vec<Supplier>,
    loads: usize,
}

impl<A: PosApi> SuppliersPage<A> {
    pub async fn open(guard: &AuthGuard<A>) -> Result<Self, PosError> {
        let viewer = guard.enter(Self::CAPABILITY).await?;
        let mut page = Self {
            api: Arc::clone(guard.api()),
            viewer,
            suppliers: Vec::new(),
            loads: 0,
        };
        page.load().await?;
        Ok(page)
    }

    pub fn viewer(&self) -> &SessionUser {
        &self.viewer
    }

    pub async fn create(&mut self, form: &SupplierForm) -> Result<(), PosError> {
        let input = form.validate()?;
        self.api.create_supplier(&input).await?;
        info!(name = %input.name, "supplier created");
        self.after_mutation().await
    }

    pub async fn update(&mut self, id: Id, form: &SupplierForm) -> Result<(), PosError> {
        let input = form.validate()?;
        self.api.update_supplier(id, &input).await?;
        info!(supplier_id = id, "supplier updated");
        self.after_mutation().await
    }

    pub async fn delete(&mut self, id: Id, confirm: &dyn Confirm) -> Result<Deletion, PosError> {
        let label = self
            .suppliers
            .iter()
            .find(|s| s.id == id)
            .map_or_else(|| format!("#{id}"), |s| s.name.clone());
        if !confirm_delete(confirm, "supplier", &label).await {
            return Ok(Deletion::Cancelled);
        }
        self.api.delete_supplier(id).await?;
        info!(supplier_id = id, "supplier deleted");
        self.after_mutation().await?;
        Ok(Deletion::Deleted)
    }
}

#[async_trait]
impl<A: PosApi> ResourcePage for SuppliersPage<A> {
    type Item = Supplier;
    const CAPABILITY: Capability = Capability::ManageSuppliers;

    async fn load(&mut self) -> Result<(), PosError> {
        self.suppliers = self.api.list_suppliers().await?;
        self.loads += 1;
        Ok(())
    }

    fn items(&self) -> &[Supplier] {
        &self.suppliers
    }

    fn load_count(&self) -> usize {
        self.loads
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

use super::{confirm_delete, Confirm, Deletion, ResourcePage};
use crate::api::{PosApi, ProductInput};
use crate::entities::{Category, Id, Product, SessionUser};
use crate::errors::PosError;
use crate::guard::AuthGuard;
use crate::policy::Capability;
use crate::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category_id: Option<Id>,
    pub buy_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub barcode: String,
}

impl ProductForm {
    /// Prefills the form from an existing product, as the edit dialog does.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category_id: product.category_id,
            buy_price: Some(product.buy_price),
            sell_price: Some(product.sell_price),
            barcode: product.barcode.clone(),
        }
    }

    fn validate(&self) -> Result<ProductInput, PosError> {
        let missing = [
            ("name", self.name.trim().is_empty()),
            ("category", self.category_id.is_none()),
            ("buy price", self.buy_price.is_none()),
            ("sell price", self.sell_price.is_none()),
            ("barcode", self.barcode.trim().is_empty()),
        ];
        let names: Vec<&str> = missing.iter().filter(|(_, m)| *m).map(|(n, _)| *n).collect();
        if !names.is_empty() {
            return Err(PosError::validation(format!(
                "all fields are required, missing: {}",
                names.join(", ")
            )));
        }

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            category_id: validation::required_value("category", self.category_id)?,
            buy_price: validation::required_value("buy price", self.buy_price)?,
            sell_price: validation::required_value("sell price", self.sell_price)?,
            barcode: self.barcode.trim().to_string(),
        })
    }
}

pub struct ProductsPage<A: PosApi> {
    api: Arc<A>,
    viewer: SessionUser,
    products: Vec<Product>,
    categories: Vec<Category>,
    loads: usize,
}

impl<A: PosApi> ProductsPage<A> {
    pub async fn open(guard: &AuthGuard<A>) -> Result<Self, PosError> {
        let viewer = guard.enter(Self::CAPABILITY).await?;
        let mut page = Self {
            api: Arc::clone(guard.api()),
            viewer,
            products: Vec::new(),
            categories: Vec::new(),
            loads: 0,
        };
        page.load().await?;
        Ok(page)
    }

    pub fn viewer(&self) -> &SessionUser {
        &self.viewer
    }

    /// Choices for the category field.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: Id) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub async fn create(&mut self, form: &ProductForm) -> Result<(), PosError> {
        let input = form.validate()?;
        self.api.create_product(&input).await?;
        info!(name = %input.name, barcode = %input.barcode, "product created");
        self.after_mutation().await
    }

    pub async fn update(&mut self, id: Id, form: &ProductForm) -> Result<(), PosError> {
        let input = form.validate()?;
        self.api.update_product(id, &input).await?;
        info!(product_id = id, "product updated");
        self.after_mutation().await
    }

    pub async fn delete(&mut self, id: Id, confirm: &dyn Confirm) -> Result<Deletion, PosError> {
        let label = self
            .product(id)
            .map_or_else(|| format!("#{id}"), |p| p.name.clone());
        if !confirm_delete(confirm, "product", &label).await {
            return Ok(Deletion::Cancelled);
        }
        self.api.delete_product(id).await?;
        info!(product_id = id, "product deleted");
        self.after_mutation().await?;
        Ok(Deletion::Deleted)
    }
}

#[async_trait]
impl<A: PosApi> ResourcePage for ProductsPage<A> {
    type Item = Product;
    const CAPABILITY: Capability = Capability::ManageProducts;

    async fn load(&mut self) -> Result<(), PosError> {
        self.products = self.api.list_products().await?;
        self.categories = self.api.list_categories().await?;
        self.loads += 1;
        Ok(())
    }

    fn items(&self) -> &[Product] {
        &self.products
    }

    fn load_count(&self) -> usize {
        self.loads
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ResourcePage;
use crate::api::{PosApi, StockMovement};
use crate::entities::{Id, Product, SessionUser, StockDirection, StockTransaction};
use crate::errors::PosError;
use crate::guard::AuthGuard;
use crate::policy::Capability;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockForm {
    pub product_id: Option<Id>,
    pub quantity: Option<u32>,
}

impl StockForm {
    pub fn new(product_id: Id, quantity: u32) -> Self {
        Self {
            product_id: Some(product_id),
            quantity: Some(quantity),
        }
    }

    fn validate(&self) -> Result<StockMovement, PosError> {
        match (self.product_id, self.quantity) {
            (Some(product_id), Some(quantity)) if quantity > 0 => Ok(StockMovement {
                product_id,
                quantity,
            }),
            _ => Err(PosError::validation("product and quantity are required")),
        }
    }
}

/// Products with their server-derived stock, plus the movement history.
pub struct StockPage<A: PosApi> {
    api: Arc<A>,
    viewer: SessionUser,
    products: Vec<Product>,
    transactions: Vec<StockTransaction>,
    loads: usize,
}

impl<A: PosApi> StockPage<A> {
    pub async fn open(guard: &AuthGuard<A>) -> Result<Self, PosError> {
        let viewer = guard.enter(Self::CAPABILITY).await?;
        let mut page = Self {
            api: Arc::clone(guard.api()),
            viewer,
            products: Vec::new(),
            transactions: Vec::new(),
            loads: 0,
        };
        page.load().await?;
        Ok(page)
    }

    pub fn viewer(&self) -> &SessionUser {
        &self.viewer
    }

    pub fn transactions(&self) -> &[StockTransaction] {
        &self.transactions
    }

    pub async fn add(&mut self, form: &StockForm) -> Result<(), PosError> {
        self.move_stock(StockDirection::Add, form).await
    }

    pub async fn remove(&mut self, form: &StockForm) -> Result<(), PosError> {
        self.move_stock(StockDirection::Remove, form).await
    }

    async fn move_stock(
        &mut self,
        direction: StockDirection,
        form: &StockForm,
    ) -> Result<(), PosError> {
        let movement = form.validate()?;
        match direction {
            StockDirection::Add => self.api.add_stock(&movement).await?,
            StockDirection::Remove => self.api.remove_stock(&movement).await?,
        }
        info!(
            product_id = movement.product_id,
            quantity = movement.quantity,
            %direction,
            "stock moved"
        );
        self.after_mutation().await
    }
}

#[async_trait]
impl<A: PosApi> ResourcePage for StockPage<A> {
    type Item = Product;
    const CAPABILITY: Capability = Capability::ManageStock;

    async fn load(&mut self) -> Result<(), PosError> {
        self.products = self.api.list_products().await?;
        self.transactions = self.api.list_stock().await?;
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

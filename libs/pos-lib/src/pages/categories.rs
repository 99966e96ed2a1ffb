use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{confirm_delete, Confirm, Deletion, ResourcePage};
use crate::api::{CategoryInput, PosApi};
use crate::entities::{Category, Id, SessionUser};
use crate::errors::PosError;
use crate::guard::AuthGuard;
use crate::policy::Capability;
use crate::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn validate(&self) -> Result<CategoryInput, PosError> {
        Ok(CategoryInput {
            name: validation::required("category name", &self.name)?,
        })
    }
}

pub struct CategoriesPage<A: PosApi> {
    api: Arc<A>,
    viewer: SessionUser,
    categories: Vec<Category>,
    loads: usize,
}

impl<A: PosApi> CategoriesPage<A> {
    pub async fn open(guard: &AuthGuard<A>) -> Result<Self, PosError> {
        let viewer = guard.enter(Self::CAPABILITY).await?;
        let mut page = Self {
            api: Arc::clone(guard.api()),
            viewer,
            categories: Vec::new(),
            loads: 0,
        };
        page.load().await?;
        Ok(page)
    }

    pub fn viewer(&self) -> &SessionUser {
        &self.viewer
    }

    pub async fn create(&mut self, form: &CategoryForm) -> Result<(), PosError> {
        let input = form.validate()?;
        self.api.create_category(&input).await?;
        info!(name = %input.name, "category created");
        self.after_mutation().await
    }

    pub async fn update(&mut self, id: Id, form: &CategoryForm) -> Result<(), PosError> {
        let input = form.validate()?;
        self.api.update_category(id, &input).await?;
        info!(category_id = id, "category updated");
        self.after_mutation().await
    }

    pub async fn delete(&mut self, id: Id, confirm: &dyn Confirm) -> Result<Deletion, PosError> {
        let label = self
            .categories
            .iter()
            .find(|c| c.id == id)
            .map_or_else(|| format!("#{id}"), |c| c.name.clone());
        if !confirm_delete(confirm, "category", &label).await {
            return Ok(Deletion::Cancelled);
        }
        self.api.delete_category(id).await?;
        info!(category_id = id, "category deleted");
        self.after_mutation().await?;
        Ok(Deletion::Deleted)
    }
}

#[async_trait]
impl<A: PosApi> ResourcePage for CategoriesPage<A> {
    type Item = Category;
    const CAPABILITY: Capability = Capability::ManageCategories;

    async fn load(&mut self) -> Result<(), PosError> {
        self.categories = self.api.list_categories().await?;
        self.loads += 1;
        Ok(())
    }

    fn items(&self) -> &[Category] {
        &self.categories
    }

    fn load_count(&self) -> usize {
        self.loads
    }
}

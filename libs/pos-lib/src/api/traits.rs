use async_trait::async_trait;

use crate::api::errors::ApiError;
use crate::api::requests::{
    CategoryInput, LoginRequest, LoginResponse, NewUser, ProductInput, StockMovement,
    SupplierInput, UserUpdate,
};
use crate::entities::{Category, Id, Product, StockTransaction, Supplier, User};

/// The backend REST surface. Every method except `login` is sent with the
/// session's bearer token.
#[async_trait]
pub trait PosApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn list_users(&self, created_by: Option<Id>) -> Result<Vec<User>, ApiError>;
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError>;
    async fn update_user(&self, id: Id, user: &UserUpdate) -> Result<(), ApiError>;
    async fn delete_user(&self, id: Id) -> Result<(), ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn create_category(&self, category: &CategoryInput) -> Result<(), ApiError>;
    async fn update_category(&self, id: Id, category: &CategoryInput) -> Result<(), ApiError>;
    async fn delete_category(&self, id: Id) -> Result<(), ApiError>;

    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn create_product(&self, product: &ProductInput) -> Result<(), ApiError>;
    async fn update_product(&self, id: Id, product: &ProductInput) -> Result<(), ApiError>;
    async fn delete_product(&self, id: Id) -> Result<(), ApiError>;

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError>;
    async fn create_supplier(&self, supplier: &SupplierInput) -> Result<(), ApiError>;
    async fn update_supplier(&self, id: Id, supplier: &SupplierInput) -> Result<(), ApiError>;
    async fn delete_supplier(&self, id: Id) -> Result<(), ApiError>;

    async fn list_stock(&self) -> Result<Vec<StockTransaction>, ApiError>;
    async fn add_stock(&self, movement: &StockMovement) -> Result<(), ApiError>;
    async fn remove_stock(&self, movement: &StockMovement) -> Result<(), ApiError>;
}

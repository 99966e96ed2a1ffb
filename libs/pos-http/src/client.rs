use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use pos_lib::api::{
    ApiError, CategoryInput, LoginRequest, LoginResponse, NewUser, PosApi, ProductInput,
    StockMovement, SupplierInput, UserUpdate,
};
use pos_lib::entities::{Category, Id, Product, StockTransaction, Supplier, User};
use pos_lib::session::SessionContext;

use crate::config::ApiConfig;
use crate::routes::{
    by_id, CATEGORIES_PATH, CREATED_BY_PARAM, LOGIN_PATH, PRODUCTS_PATH, STOCK_ADD_PATH,
    STOCK_PATH, STOCK_REMOVE_PATH, SUPPLIERS_PATH, USERS_PATH,
};

fn transport_error(operation: &str, err: reqwest::Error) -> ApiError {
    warn!(operation, error = %err, "request did not complete");
    ApiError::Network(err.to_string())
}

/// Talks to the POS backend. The bearer token is read from the shared
/// [`SessionContext`] on every call, so a login or logout elsewhere in the
/// process takes effect immediately.
pub struct HttpPosApi {
    config: ApiConfig,
    http: Client,
    session: SessionContext,
}

impl HttpPosApi {
    pub fn new(config: ApiConfig, session: SessionContext) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            http,
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn bearer(&self) -> Result<SecretString, ApiError> {
        self.session.token().await.ok_or(ApiError::Unauthenticated)
    }

    async fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.bearer().await?;
        Ok(self
            .http
            .request(method, self.config.url(path))
            .bearer_auth(token.expose_secret()))
    }

    async fn execute(&self, request: RequestBuilder, operation: &str) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let status = response.status();
        if status.is_success() {
            debug!(operation, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_body(status.as_u16(), &body);
        warn!(operation, status = status.as_u16(), error = %err, "request rejected");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(operation, e))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(operation, error = %e, "response body did not match the expected shape");
            ApiError::InvalidResponse(e.to_string())
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        operation: &str,
    ) -> Result<T, ApiError> {
        let mut request = self.authorized(Method::GET, path).await?;
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request, operation).await?;
        Self::decode(response, operation).await
    }

    async fn submit<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        operation: &str,
    ) -> Result<(), ApiError> {
        let request = self.authorized(method, path).await?.json(body);
        self.execute(request, operation).await?;
        Ok(())
    }

    async fn remove(&self, path: &str, operation: &str) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, path).await?;
        self.execute(request, operation).await?;
        Ok(())
    }
}

#[async_trait]
impl PosApi for HttpPosApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = self
            .http
            .post(self.config.url(LOGIN_PATH))
            .json(credentials);
        let response = self.execute(request, "login").await?;
        Self::decode(response, "login").await
    }

    async fn list_users(&self, created_by: Option<Id>) -> Result<Vec<User>, ApiError> {
        let query: Vec<(&str, String)> = created_by
            .map(|id| vec![(CREATED_BY_PARAM, id.to_string())])
            .unwrap_or_default();
        self.fetch(USERS_PATH, &query, "list_users").await
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.submit(Method::POST, USERS_PATH, user, "create_user").await
    }

    async fn update_user(&self, id: Id, user: &UserUpdate) -> Result<(), ApiError> {
        self.submit(Method::PUT, &by_id(USERS_PATH, id), user, "update_user")
            .await
    }

    async fn delete_user(&self, id: Id) -> Result<(), ApiError> {
        self.remove(&by_id(USERS_PATH, id), "delete_user").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch(CATEGORIES_PATH, &[], "list_categories").await
    }

    async fn create_category(&self, category: &CategoryInput) -> Result<(), ApiError> {
        self.submit(Method::POST, CATEGORIES_PATH, category, "create_category")
            .await
    }

    async fn update_category(&self, id: Id, category: &CategoryInput) -> Result<(), ApiError> {
        self.submit(
            Method::PUT,
            &by_id(CATEGORIES_PATH, id),
            category,
            "update_category",
        )
        .await
    }

    async fn delete_category(&self, id: Id) -> Result<(), ApiError> {
        self.remove(&by_id(CATEGORIES_PATH, id), "delete_category")
            .await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch(PRODUCTS_PATH, &[], "list_products").await
    }

    async fn create_product(&self, product: &ProductInput) -> Result<(), ApiError> {
        self.submit(Method::POST, PRODUCTS_PATH, product, "create_product")
            .await
    }

    async fn update_product(&self, id: Id, product: &ProductInput) -> Result<(), ApiError> {
        self.submit(
            Method::PUT,
            &by_id(PRODUCTS_PATH, id),
            product,
            "update_product",
        )
        .await
    }

    async fn delete_product(&self, id: Id) -> Result<(), ApiError> {
        self.remove(&by_id(PRODUCTS_PATH, id), "delete_product").await
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.fetch(SUPPLIERS_PATH, &[], "list_suppliers").await
    }

    async fn create_supplier(&self, supplier: &SupplierInput) -> Result<(), ApiError> {
        self.submit(Method::POST, SUPPLIERS_PATH, supplier, "create_supplier")
            .await
    }

    async fn update_supplier(&self, id: Id, supplier: &SupplierInput) -> Result<(), ApiError> {
        self.submit(
            Method::PUT,
            &by_id(SUPPLIERS_PATH, id),
            supplier,
            "update_supplier",
        )
        .await
    }

    async fn delete_supplier(&self, id: Id) -> Result<(), ApiError> {
        self.remove(&by_id(SUPPLIERS_PATH, id), "delete_supplier")
            .await
    }

    async fn list_stock(&self) -> Result<Vec<StockTransaction>, ApiError> {
        self.fetch(STOCK_PATH, &[], "list_stock").await
    }

    async fn add_stock(&self, movement: &StockMovement) -> Result<(), ApiError> {
        self.submit(Method::POST, STOCK_ADD_PATH, movement, "add_stock")
            .await
    }

    async fn remove_stock(&self, movement: &StockMovement) -> Result<(), ApiError> {
        self.submit(Method::POST, STOCK_REMOVE_PATH, movement, "remove_stock")
            .await
    }
}

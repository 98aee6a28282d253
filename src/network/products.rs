//! Product API facade - named operations over the API client

use serde_json::Value;

use crate::constants::{ALL_PRODUCTS_PATH, FEATURED_PRODUCTS_PATH};
use crate::error::ApiError;
use crate::network::client::ApiClient;

/// Which product listing to fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductQuery {
    Featured,
    All,
}

impl ProductQuery {
    pub fn path(&self) -> &'static str {
        match self {
            ProductQuery::Featured => FEATURED_PRODUCTS_PATH,
            ProductQuery::All => ALL_PRODUCTS_PATH,
        }
    }
}

/// Returns raw response bodies; shape handling belongs to the consuming view
#[derive(Clone, Debug)]
pub struct ProductApi {
    client: ApiClient,
}

impl ProductApi {
    pub fn new(client: ApiClient) -> Self {
        ProductApi { client }
    }

    pub async fn featured_products(&self) -> Result<Value, ApiError> {
        self.fetch(ProductQuery::Featured).await
    }

    pub async fn all_products(&self) -> Result<Value, ApiError> {
        self.fetch(ProductQuery::All).await
    }

    pub async fn fetch(&self, query: ProductQuery) -> Result<Value, ApiError> {
        self.client.get(query.path()).await
    }
}

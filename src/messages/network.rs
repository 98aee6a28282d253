//! Network messages - communication between App and Network layers

use serde_json::Value;

use crate::error::ApiError;
use crate::network::products::ProductQuery;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch a product listing for the view mounted under `id`
    FetchProducts { id: u64, query: ProductQuery },
    /// The view that issued `id` was unmounted
    CancelFetch(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Raw outcome of a product fetch
    Products {
        id: u64,
        query: ProductQuery,
        result: Result<Value, ApiError>,
    },
    /// Fetch was cancelled before it resolved
    Cancelled { id: u64 },
}

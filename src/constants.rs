//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Display image used when a product has no `image_url`
pub const DEFAULT_PRODUCT_IMAGE: &str = "/path/to/default/image.png";

/// Default brand shown in the navbar
pub const DEFAULT_STORE_NAME: &str = "Storefront";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "storefront.log";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Request timeout applied by the HTTP client
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const FEATURED_PRODUCTS_PATH: &str = "/products/featured/";
/// Assumed to answer with one of the featured-listing envelopes. A paginated
/// `{count, next, previous, results}` body resolves as a shape error.
pub const ALL_PRODUCTS_PATH: &str = "/products/";

/// User-facing error shown when response JSON has no product array
pub const SHAPE_ERROR_MESSAGE: &str = "Unable to parse product data";

/// Number of star slots in a rating
pub const RATING_SLOTS: usize = 5;

/// Application name
pub const APP_NAME: &str = "Storefront TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

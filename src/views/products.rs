//! Product grid view - fetch-on-mount, response normalization and card state
//!
//! Backs both the featured section of the landing page and the catalog page.
//! A view is created when its route mounts and lives until the route is left;
//! it never fetches twice.

use std::collections::HashMap;

use serde_json::Value;

use crate::constants::{RATING_SLOTS, SHAPE_ERROR_MESSAGE};
use crate::error::{ApiError, ShapeError};
use crate::models::{CardImage, Product, ProductId};
use crate::network::products::ProductQuery;
use crate::views::carousel::{CardDisplay, CarouselPosition};

/// Lifecycle of the single fetch a view performs
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
    Loading,
    Success,
    Error(String),
}

/// Pull the product array out of a response body.
///
/// Accepted envelopes, tried in this order:
/// 1. a bare array
/// 2. `{"data": [...]}`
/// 3. `{"data": {"data": [...]}}`
///
/// Any other envelope is a [`ShapeError`]. Records inside an accepted
/// envelope that do not decode as products are skipped with a warning.
pub fn resolve_products(body: Value) -> Result<Vec<Product>, ShapeError> {
    let records = match body {
        Value::Array(items) => items,
        Value::Object(mut outer) => match outer.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(mut inner)) => match inner.remove("data") {
                Some(Value::Array(items)) => items,
                other => {
                    return Err(ShapeError {
                        found: format!("data.data is {}", describe(other.as_ref())),
                    })
                }
            },
            other => {
                return Err(ShapeError {
                    found: format!(
                        "object with keys [{}] and data {}",
                        outer.keys().cloned().collect::<Vec<_>>().join(", "),
                        describe(other.as_ref())
                    ),
                })
            }
        },
        other => {
            return Err(ShapeError {
                found: describe(Some(&other)),
            })
        }
    };

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(record = i, error = %e, "Skipping record that is not a product");
                None
            }
        })
        .collect())
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "missing".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(_)) => "a boolean".to_string(),
        Some(Value::Number(_)) => "a number".to_string(),
        Some(Value::String(_)) => "a string".to_string(),
        Some(Value::Array(_)) => "an array".to_string(),
        Some(Value::Object(map)) => format!(
            "an object with keys [{}]",
            map.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// A rating star slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarSlot {
    Filled,
    Empty,
}

/// Slot `i` is filled when `i < floor(rating)`
pub fn star_slots(rating: f64) -> [StarSlot; RATING_SLOTS] {
    let filled = if rating.is_finite() && rating > 0.0 {
        rating.floor() as usize
    } else {
        0
    };
    let mut slots = [StarSlot::Empty; RATING_SLOTS];
    for (i, slot) in slots.iter_mut().enumerate() {
        if i < filled {
            *slot = StarSlot::Filled;
        }
    }
    slots
}

pub fn rating_label(rating: f64) -> String {
    format!("({})", rating)
}

pub fn price_label(price: f64) -> String {
    format!("${:.2}", price)
}

/// Everything the UI needs to draw one product card
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub summary: Option<String>,
    pub image: CardImage,
    /// Present only when the card has more than one image
    pub position: Option<CarouselPosition>,
    pub stars: [StarSlot; RATING_SLOTS],
    pub rating_label: String,
    pub price_label: String,
    pub in_stock: Option<bool>,
    pub wishlisted: bool,
    pub selected: bool,
}

impl ProductCard {
    pub fn shows_carousel_controls(&self) -> bool {
        self.position.is_some()
    }

    pub fn filled_stars(&self) -> usize {
        self.stars.iter().filter(|s| **s == StarSlot::Filled).count()
    }
}

/// Immutable copy of a view for the render layer
#[derive(Clone, Debug, PartialEq)]
pub struct ProductsSnapshot {
    pub query: ProductQuery,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading_message: &'static str,
    pub state: FetchState,
    pub cards: Vec<ProductCard>,
}

impl ProductsSnapshot {
    pub fn new(query: ProductQuery) -> Self {
        ProductsSnapshot {
            query,
            title: title(query),
            subtitle: subtitle(query),
            loading_message: loading_message(query),
            state: FetchState::Loading,
            cards: Vec::new(),
        }
    }
}

fn title(query: ProductQuery) -> &'static str {
    match query {
        ProductQuery::Featured => "Featured Products",
        ProductQuery::All => "All Products",
    }
}

fn subtitle(query: ProductQuery) -> &'static str {
    match query {
        ProductQuery::Featured => "Discover our most popular and trending items",
        ProductQuery::All => "Browse the full catalog",
    }
}

fn loading_message(query: ProductQuery) -> &'static str {
    match query {
        ProductQuery::Featured => "Loading featured products...",
        ProductQuery::All => "Loading products...",
    }
}

/// Message shown when the fetch itself fails
pub fn failure_message(query: ProductQuery) -> &'static str {
    match query {
        ProductQuery::Featured => "Failed to load featured products",
        ProductQuery::All => "Failed to load products",
    }
}

/// A mounted product grid
#[derive(Debug)]
pub struct ProductsView {
    query: ProductQuery,
    request_id: u64,
    state: FetchState,
    products: Vec<Product>,
    display: HashMap<ProductId, CardDisplay>,
    selected: usize,
}

impl ProductsView {
    /// Mount in `Loading`; the caller issues the fetch tagged with `request_id`
    pub fn mount(query: ProductQuery, request_id: u64) -> Self {
        ProductsView {
            query,
            request_id,
            state: FetchState::Loading,
            products: Vec::new(),
            display: HashMap::new(),
            selected: 0,
        }
    }

    pub fn query(&self) -> ProductQuery {
        self.query
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Settle the fetch. Only the first outcome counts.
    pub fn apply(&mut self, result: Result<Value, ApiError>) {
        if !self.is_loading() {
            tracing::warn!(id = self.request_id, "Ignoring second fetch outcome");
            return;
        }

        match result {
            Ok(body) => match resolve_products(body) {
                Ok(products) => {
                    tracing::info!(id = self.request_id, count = products.len(), "Products loaded");
                    self.products = products;
                    self.selected = 0;
                    self.state = FetchState::Success;
                }
                Err(e) => {
                    tracing::error!(id = self.request_id, found = %e.found, "Unexpected response structure");
                    self.state = FetchState::Error(SHAPE_ERROR_MESSAGE.to_string());
                }
            },
            Err(e) => {
                tracing::error!(id = self.request_id, error = %e, "Error fetching products");
                self.state = FetchState::Error(failure_message(self.query).to_string());
            }
        }
    }

    fn image_count(&self, id: ProductId) -> usize {
        self.products
            .iter()
            .find(|p| p.id == id)
            .map(|p| 1 + p.additional_images.len())
            .unwrap_or(0)
    }

    pub fn display(&self, id: ProductId) -> CardDisplay {
        self.display.get(&id).copied().unwrap_or_default()
    }

    pub fn prev_image(&mut self, id: ProductId) {
        let len = self.image_count(id);
        if len > 0 {
            self.display.entry(id).or_default().prev_image(len);
        }
    }

    pub fn next_image(&mut self, id: ProductId) {
        let len = self.image_count(id);
        if len > 0 {
            self.display.entry(id).or_default().next_image(len);
        }
    }

    pub fn toggle_wishlist(&mut self, id: ProductId) {
        if self.image_count(id) > 0 {
            self.display.entry(id).or_default().toggle_wishlist();
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.selected_product().map(|p| p.id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.products.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn card(&self, index: usize) -> Option<ProductCard> {
        let product = self.products.get(index)?;
        let images = product.image_sequence();
        let display = self.display(product.id);
        let current = display.image_index(images.len());
        let position = (images.len() > 1).then_some(CarouselPosition {
            index: current,
            count: images.len(),
        });

        Some(ProductCard {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            summary: product.short_description.clone().filter(|s| !s.is_empty()),
            image: images[current].clone(),
            position,
            stars: star_slots(product.rating),
            rating_label: rating_label(product.rating),
            price_label: price_label(product.price),
            in_stock: product.is_in_stock,
            wishlisted: display.wishlisted,
            selected: index == self.selected,
        })
    }

    pub fn cards(&self) -> Vec<ProductCard> {
        (0..self.products.len()).filter_map(|i| self.card(i)).collect()
    }

    pub fn snapshot(&self) -> ProductsSnapshot {
        ProductsSnapshot {
            state: self.state.clone(),
            cards: self.cards(),
            ..ProductsSnapshot::new(self.query)
        }
    }
}

//! Route table

use crate::network::products::ProductQuery;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    About,
    Catalog,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Landing, Route::About, Route::Catalog];

    /// Exact path match; there is no catch-all
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::About => "/about",
            Route::Catalog => "/products",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::About => "About",
            Route::Catalog => "All Products",
        }
    }

    /// Listing the route fetches on mount, if any
    pub fn product_query(&self) -> Option<ProductQuery> {
        match self {
            Route::Landing => Some(ProductQuery::Featured),
            Route::Catalog => Some(ProductQuery::All),
            Route::About => None,
        }
    }
}

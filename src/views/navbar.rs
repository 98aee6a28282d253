//! Navbar menu

use crate::views::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub children: &'static [NavLink],
}

impl NavLink {
    const fn leaf(label: &'static str, path: &'static str) -> Self {
        NavLink { label, path, children: &[] }
    }

    /// `None` for menu entries the route table does not serve
    pub fn route(&self) -> Option<Route> {
        Route::from_path(self.path)
    }

    pub fn has_menu(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink::leaf("Home", "/"),
    NavLink {
        label: "Electronics",
        path: "/electronics",
        children: &[
            NavLink::leaf("TV & Home Theater", "/electronics/tv"),
            NavLink::leaf("Computers & smartphones", "/electronics/computers"),
            NavLink::leaf("Home tools", "/electronics/tools"),
        ],
    },
    NavLink {
        label: "Food",
        path: "/food",
        children: &[
            NavLink::leaf("Groceries", "/food/groceries"),
            NavLink::leaf("Prepared Meals", "/food/prepared-meals"),
            NavLink::leaf("Snacks & Beverages", "/food/snacks-beverages"),
        ],
    },
    NavLink::leaf("About", "/about"),
];

/// The top-level entry that should look active on `route`
pub fn active_link(route: Route) -> Option<usize> {
    NAV_LINKS.iter().position(|link| link.route() == Some(route))
}

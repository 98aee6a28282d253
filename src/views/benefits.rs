//! "Why Choose us" panel

pub const HEADING: &str = "Why Choose us";
pub const SUBHEADING: &str = "Experience the best in online shopping with our premium services";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: "⛟",
        title: "Fast Delivery",
        description: "Free shipping on orders above $50",
    },
    Benefit {
        icon: "⛨",
        title: "Secure Payment",
        description: "100% secure payment methods",
    },
    Benefit {
        icon: "✦",
        title: "Quality Products",
        description: "Certified quality products",
    },
    Benefit {
        icon: "☎",
        title: "24/7 Support",
        description: "Dedicated support team",
    },
];

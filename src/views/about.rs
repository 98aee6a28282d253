pub const TITLE: &str = "About Us";

pub const PARAGRAPHS: [&str; 3] = [
    "We are an independent online store bringing together electronics, \
     home tools and everyday food in one place.",
    "Every product in our catalog is checked for quality before it is listed, \
     and our featured selection is refreshed from what customers rate highest.",
    "Questions about an order? Our support team is available around the clock.",
];

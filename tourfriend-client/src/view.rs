//! Card view models built from listing records.

use tourfriend_shared::{Destination, TourPackage};
use uuid::Uuid;

pub const DESTINATION_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=400&h=220&fit=crop";
pub const PACKAGE_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=400&h=220&fit=crop";

pub const CURRENCY_SYMBOL: char = '₹';
pub const MAX_STARS: u8 = 5;
pub const VISIBLE_HIGHLIGHTS: usize = 3;

/// `floor(rating)` filled stars out of [`MAX_STARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let filled = if rating.is_nan() {
            0
        } else {
            rating.floor().clamp(0.0, MAX_STARS as f64) as u8
        };
        Self { filled }
    }

    pub fn slots(&self) -> [bool; MAX_STARS as usize] {
        let mut slots = [false; MAX_STARS as usize];
        for slot in slots.iter_mut().take(self.filled as usize) {
            *slot = true;
        }
        slots
    }
}

/// Formats an integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn format_price(price: Option<i64>) -> String {
    match price {
        Some(p) => format!("{}{}", CURRENCY_SYMBOL, group_thousands(p)),
        None => format!("{}N/A", CURRENCY_SYMBOL),
    }
}

/// Whole-percent saving of `price` against `original_price`, if any.
pub fn discount_percent(price: Option<i64>, original_price: Option<i64>) -> Option<u32> {
    match (price, original_price) {
        (Some(p), Some(o)) if o > 0 && o > p && p >= 0 => {
            Some(((o - p) as f64 / o as f64 * 100.0).round() as u32)
        }
        _ => None,
    }
}

/// First few highlights plus a `+N` label for the rest.
pub fn highlight_preview(highlights: &[String]) -> (Vec<String>, Option<String>) {
    let shown = highlights.iter().take(VISIBLE_HIGHLIGHTS).cloned().collect();
    let hidden = highlights.len().saturating_sub(VISIBLE_HIGHLIGHTS);
    let overflow = (hidden > 0).then(|| format!("+{}", hidden));
    (shown, overflow)
}

/// Absolute URLs pass through, relative paths hang off the API host, and
/// missing values use the fallback.
pub fn resolve_image(base_url: &str, image: Option<&str>, fallback: &'static str) -> String {
    match image.map(str::trim) {
        None | Some("") => fallback.to_string(),
        Some(url) if url.starts_with("http") => url.to_string(),
        Some(path) => format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
    }
}

/// Image source for one card. Switches to the fallback once a load fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    fallback: &'static str,
}

impl CardImage {
    pub fn new(base_url: &str, image: Option<&str>, fallback: &'static str) -> Self {
        Self {
            src: resolve_image(base_url, image, fallback),
            fallback,
        }
    }

    pub fn on_error(&mut self) {
        self.src = self.fallback.to_string();
    }

    pub fn is_fallback(&self) -> bool {
        self.src == self.fallback
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestinationCard {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image: CardImage,
    pub rating: f64,
    pub stars: StarRating,
    pub review_line: String,
    pub price_label: String,
    pub favorite: bool,
}

impl DestinationCard {
    pub fn new(destination: &Destination, base_url: &str, favorite: bool) -> Self {
        Self {
            id: destination.id,
            name: destination.name.clone(),
            country: destination.country.clone(),
            description: destination.description.clone(),
            image: CardImage::new(
                base_url,
                destination.image.as_deref(),
                DESTINATION_FALLBACK_IMAGE,
            ),
            rating: destination.rating,
            stars: StarRating::from_rating(destination.rating),
            review_line: format!("{} reviews", destination.review_count),
            price_label: format_price(destination.price),
            favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageCard {
    pub id: Uuid,
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub category: String,
    pub image: CardImage,
    pub rating: f64,
    pub stars: StarRating,
    pub price_label: String,
    pub original_price_label: Option<String>,
    pub discount_percent: Option<u32>,
    pub highlights: Vec<String>,
    pub more_highlights: Option<String>,
    pub review_line: String,
    pub favorite: bool,
}

impl PackageCard {
    pub fn new(package: &TourPackage, base_url: &str, favorite: bool) -> Self {
        let discount = discount_percent(package.price, package.original_price);
        let (highlights, more_highlights) = highlight_preview(&package.highlights);

        Self {
            id: package.id,
            title: package.title.clone(),
            destination: package.destination.clone(),
            duration: package.duration.clone(),
            category: package.category.clone(),
            image: CardImage::new(base_url, package.image.as_deref(), PACKAGE_FALLBACK_IMAGE),
            rating: package.rating,
            stars: StarRating::from_rating(package.rating),
            price_label: format_price(package.price),
            original_price_label: discount
                .and(package.original_price.map(|o| format_price(Some(o)))),
            discount_percent: discount,
            highlights,
            more_highlights,
            review_line: format!(
                "{} reviews • {} sold",
                package.review_count, package.sales_count
            ),
            favorite,
        }
    }
}

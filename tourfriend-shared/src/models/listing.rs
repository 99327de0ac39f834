use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A destination as stored and served by the listing API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub image: Option<String>,
    pub rating: f64,
    pub review_count: i64,
    pub description: String,
    #[serde(default)]
    pub price: Option<i64>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A tour package. `destination` is a free-text label, not a reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub title: String,
    pub destination: String,
    pub duration: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    pub rating: f64,
    pub review_count: i64,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub sales_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert form of [`Destination`]; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    pub image: Option<String>,
    pub rating: f64,
    pub review_count: i64,
    pub description: String,
    pub price: Option<i64>,
    pub featured: bool,
}

/// Insert form of [`TourPackage`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTourPackage {
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub image: Option<String>,
    pub rating: f64,
    pub review_count: i64,
    pub highlights: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub sales_count: i64,
}

impl NewDestination {
    pub fn into_destination(self, id: Uuid, created_at: DateTime<Utc>) -> Destination {
        Destination {
            id,
            name: self.name,
            country: self.country,
            image: self.image,
            rating: self.rating,
            review_count: self.review_count,
            description: self.description,
            price: self.price,
            featured: self.featured,
            created_at,
        }
    }
}

impl NewTourPackage {
    pub fn into_package(self, id: Uuid, created_at: DateTime<Utc>) -> TourPackage {
        TourPackage {
            id,
            title: self.title,
            destination: self.destination,
            duration: self.duration,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            rating: self.rating,
            review_count: self.review_count,
            highlights: self.highlights,
            category: self.category,
            featured: self.featured,
            sales_count: self.sales_count,
            created_at,
        }
    }
}

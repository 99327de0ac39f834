use std::cmp::Ordering;

use tourfriend_shared::{Destination, TourPackage};

/// Maximum number of records any listing returns.
pub const LISTING_LIMIT: usize = 6;

/// Fields a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Rating,
    ReviewCount,
    SalesCount,
}

impl SortField {
    /// Column backing this field in the relational store.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Rating => "rating",
            SortField::ReviewCount => "review_count",
            SortField::SalesCount => "sales_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    pub const fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

/// Filter, order and truncation applied to one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub featured_only: bool,
    pub sort: Vec<SortKey>,
    pub limit: usize,
}

impl ListingQuery {
    /// Featured destinations, best rated first, ties broken by review count.
    pub fn popular_destinations() -> Self {
        Self {
            featured_only: true,
            sort: vec![
                SortKey::desc(SortField::Rating),
                SortKey::desc(SortField::ReviewCount),
            ],
            limit: LISTING_LIMIT,
        }
    }

    /// Featured packages, most sold first, ties broken by rating.
    pub fn top_selling_packages() -> Self {
        Self {
            featured_only: true,
            sort: vec![
                SortKey::desc(SortField::SalesCount),
                SortKey::desc(SortField::Rating),
            ],
            limit: LISTING_LIMIT,
        }
    }

    /// `ORDER BY` body for SQL backends. Built only from the fixed enum
    /// column names above, never from request input.
    pub fn order_by_sql(&self) -> String {
        self.sort
            .iter()
            .map(|key| {
                let dir = match key.direction {
                    Direction::Asc => "ASC",
                    Direction::Desc => "DESC",
                };
                format!("{} {}", key.field.column(), dir)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        for key in &self.sort {
            let ord = a.sort_value(key.field).total_cmp(&b.sort_value(key.field));
            let ord = match key.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Applies the query to an in-memory slice.
    pub fn apply<T: Listable + Clone>(&self, records: &[T]) -> Vec<T> {
        let mut selected: Vec<T> = records
            .iter()
            .filter(|r| !self.featured_only || r.is_featured())
            .cloned()
            .collect();
        selected.sort_by(|a, b| self.compare(a, b));
        selected.truncate(self.limit);
        selected
    }
}

/// A record that can appear in a listing.
pub trait Listable {
    fn is_featured(&self) -> bool;
    fn sort_value(&self, field: SortField) -> f64;
}

impl Listable for Destination {
    fn is_featured(&self) -> bool {
        self.featured
    }

    fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Rating => self.rating,
            SortField::ReviewCount => self.review_count as f64,
            // Destinations carry no sales figure.
            SortField::SalesCount => 0.0,
        }
    }
}

impl Listable for TourPackage {
    fn is_featured(&self) -> bool {
        self.featured
    }

    fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Rating => self.rating,
            SortField::ReviewCount => self.review_count as f64,
            SortField::SalesCount => self.sales_count as f64,
        }
    }
}

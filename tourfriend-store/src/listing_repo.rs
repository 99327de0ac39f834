use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tourfriend_catalog::ListingQuery;
use tourfriend_core::{CoreError, CoreResult, DestinationRepository, PackageRepository};
use tourfriend_shared::{Destination, NewDestination, NewTourPackage, TourPackage};
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;

const DESTINATION_COLUMNS: &str =
    "id, name, country, image, rating, review_count, description, price, featured, created_at";

const PACKAGE_COLUMNS: &str = "id, title, destination, duration, price, original_price, image, rating, \
     review_count, highlights, category, featured, sales_count, created_at";

pub struct PostgresListingRepository {
    pool: PgPool,
}

impl PostgresListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage(err: sqlx::Error) -> CoreError {
    StoreError::from(err).into()
}

fn select_sql(table: &str, columns: &str, query: &ListingQuery) -> String {
    let filter = if query.featured_only { " WHERE featured" } else { "" };
    format!(
        "SELECT {} FROM {}{} ORDER BY {} LIMIT $1",
        columns,
        table,
        filter,
        query.order_by_sql()
    )
}

#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: Uuid,
    name: String,
    country: String,
    image: Option<String>,
    rating: f64,
    review_count: i64,
    description: String,
    price: Option<i64>,
    featured: bool,
    created_at: DateTime<Utc>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination {
            id: row.id,
            name: row.name,
            country: row.country,
            image: row.image,
            rating: row.rating,
            review_count: row.review_count,
            description: row.description,
            price: row.price,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: Uuid,
    title: String,
    destination: String,
    duration: String,
    price: Option<i64>,
    original_price: Option<i64>,
    image: Option<String>,
    rating: f64,
    review_count: i64,
    highlights: Vec<String>,
    category: String,
    featured: bool,
    sales_count: i64,
    created_at: DateTime<Utc>,
}

impl From<PackageRow> for TourPackage {
    fn from(row: PackageRow) -> Self {
        TourPackage {
            id: row.id,
            title: row.title,
            destination: row.destination,
            duration: row.duration,
            price: row.price,
            original_price: row.original_price,
            image: row.image,
            rating: row.rating,
            review_count: row.review_count,
            highlights: row.highlights,
            category: row.category,
            featured: row.featured,
            sales_count: row.sales_count,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl DestinationRepository for PostgresListingRepository {
    async fn count_destinations(&self) -> CoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(&self.pool)
            .await
            .map_err(storage)?;
        Ok(count as u64)
    }

    async fn insert_destinations(&self, rows: &[NewDestination]) -> CoreResult<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO destinations (id, name, country, image, rating, review_count, description, price, featured) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(Uuid::new_v4())
                .push_bind(row.name.clone())
                .push_bind(row.country.clone())
                .push_bind(row.image.clone())
                .push_bind(row.rating)
                .push_bind(row.review_count)
                .push_bind(row.description.clone())
                .push_bind(row.price)
                .push_bind(row.featured);
        });

        let result = builder.build().execute(&self.pool).await.map_err(storage)?;
        Ok(result.rows_affected())
    }

    async fn list_destinations(&self, query: &ListingQuery) -> CoreResult<Vec<Destination>> {
        let sql = select_sql("destinations", DESTINATION_COLUMNS, query);
        debug!("Listing destinations: {}", sql);

        let rows: Vec<DestinationRow> = sqlx::query_as(&sql)
            .bind(query.limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }
}

#[async_trait]
impl PackageRepository for PostgresListingRepository {
    async fn count_packages(&self) -> CoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM packages")
            .fetch_one(&self.pool)
            .await
            .map_err(storage)?;
        Ok(count as u64)
    }

    async fn insert_packages(&self, rows: &[NewTourPackage]) -> CoreResult<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO packages (id, title, destination, duration, price, original_price, image, rating, \
             review_count, highlights, category, featured, sales_count) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(Uuid::new_v4())
                .push_bind(row.title.clone())
                .push_bind(row.destination.clone())
                .push_bind(row.duration.clone())
                .push_bind(row.price)
                .push_bind(row.original_price)
                .push_bind(row.image.clone())
                .push_bind(row.rating)
                .push_bind(row.review_count)
                .push_bind(row.highlights.clone())
                .push_bind(row.category.clone())
                .push_bind(row.featured)
                .push_bind(row.sales_count);
        });

        let result = builder.build().execute(&self.pool).await.map_err(storage)?;
        Ok(result.rows_affected())
    }

    async fn list_packages(&self, query: &ListingQuery) -> CoreResult<Vec<TourPackage>> {
        let sql = select_sql("packages", PACKAGE_COLUMNS, query);
        debug!("Listing packages: {}", sql);

        let rows: Vec<PackageRow> = sqlx::query_as(&sql)
            .bind(query.limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        Ok(rows.into_iter().map(TourPackage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql() {
        let sql = select_sql("packages", "id", &ListingQuery::top_selling_packages());
        assert_eq!(
            sql,
            "SELECT id FROM packages WHERE featured ORDER BY sales_count DESC, rating DESC LIMIT $1"
        );
    }
}

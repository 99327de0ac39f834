//! Predefined rows inserted into empty collections at startup.

use tourfriend_shared::{NewDestination, NewTourPackage};

fn destination(
    name: &str,
    image: &str,
    rating: f64,
    review_count: i64,
    description: &str,
    price: i64,
) -> NewDestination {
    NewDestination {
        name: name.to_string(),
        country: "India".to_string(),
        image: Some(image.to_string()),
        rating,
        review_count,
        description: description.to_string(),
        price: Some(price),
        featured: true,
    }
}

pub fn mock_destinations() -> Vec<NewDestination> {
    vec![
        destination(
            "Goa",
            "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2",
            4.8,
            2847,
            "Beautiful beaches and vibrant nightlife",
            15000,
        ),
        destination(
            "Kerala",
            "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944",
            4.9,
            1923,
            "God's own country with backwaters",
            18000,
        ),
        destination(
            "Rajasthan",
            "https://images.unsplash.com/photo-1477587458883-47145ed94245",
            4.7,
            3156,
            "Royal palaces and desert adventures",
            22000,
        ),
        destination(
            "Himachal Pradesh",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
            4.8,
            2134,
            "Mountain paradise with snow peaks",
            20000,
        ),
        destination(
            "Uttarakhand",
            "https://images.unsplash.com/photo-1544735716-392fe2489ffa",
            4.6,
            1567,
            "Spiritual retreats and mountain treks",
            17000,
        ),
        destination(
            "Tamil Nadu",
            "https://images.unsplash.com/photo-1582510003544-4d00b7f74220",
            4.5,
            1890,
            "Ancient temples and cultural heritage",
            16000,
        ),
    ]
}

struct PackageSeed<'a> {
    title: &'a str,
    destination: &'a str,
    duration: &'a str,
    price: i64,
    original_price: i64,
    image: &'a str,
    rating: f64,
    review_count: i64,
    highlights: [&'a str; 4],
    category: &'a str,
    sales_count: i64,
}

impl From<PackageSeed<'_>> for NewTourPackage {
    fn from(seed: PackageSeed<'_>) -> Self {
        NewTourPackage {
            title: seed.title.to_string(),
            destination: seed.destination.to_string(),
            duration: seed.duration.to_string(),
            price: Some(seed.price),
            original_price: Some(seed.original_price),
            image: Some(seed.image.to_string()),
            rating: seed.rating,
            review_count: seed.review_count,
            highlights: seed.highlights.iter().map(|h| h.to_string()).collect(),
            category: seed.category.to_string(),
            featured: true,
            sales_count: seed.sales_count,
        }
    }
}

pub fn mock_packages() -> Vec<NewTourPackage> {
    vec![
        PackageSeed {
            title: "Golden Triangle Tour",
            destination: "Delhi-Agra-Jaipur",
            duration: "6 Days 5 Nights",
            price: 25000,
            original_price: 32000,
            image: "https://images.unsplash.com/photo-1564507592333-c60657eea523",
            rating: 4.9,
            review_count: 456,
            highlights: ["Taj Mahal Visit", "Red Fort", "Hawa Mahal", "City Palace"],
            category: "Cultural",
            sales_count: 1247,
        },
        PackageSeed {
            title: "Kashmir Valley Explorer",
            destination: "Srinagar-Gulmarg-Pahalgam",
            duration: "7 Days 6 Nights",
            price: 35000,
            original_price: 42000,
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
            rating: 4.8,
            review_count: 328,
            highlights: ["Dal Lake", "Gulmarg Gondola", "Betaab Valley", "Shalimar Garden"],
            category: "Adventure",
            sales_count: 892,
        },
        PackageSeed {
            title: "Goa Beach Paradise",
            destination: "North & South Goa",
            duration: "5 Days 4 Nights",
            price: 18000,
            original_price: 24000,
            image: "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2",
            rating: 4.7,
            review_count: 623,
            highlights: ["Baga Beach", "Dudhsagar Falls", "Spice Plantation", "Cruise Party"],
            category: "Beach",
            sales_count: 1563,
        },
        PackageSeed {
            title: "Kerala Backwaters",
            destination: "Kochi-Munnar-Alleppey",
            duration: "6 Days 5 Nights",
            price: 28000,
            original_price: 35000,
            image: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944",
            rating: 4.9,
            review_count: 445,
            highlights: ["Houseboat Stay", "Tea Gardens", "Spice Markets", "Kathakali Show"],
            category: "Nature",
            sales_count: 1098,
        },
        PackageSeed {
            title: "Rajasthan Royal Experience",
            destination: "Jaipur-Udaipur-Jodhpur",
            duration: "8 Days 7 Nights",
            price: 45000,
            original_price: 55000,
            image: "https://images.unsplash.com/photo-1477587458883-47145ed94245",
            rating: 4.8,
            review_count: 287,
            highlights: ["City Palace", "Lake Pichola", "Mehrangarh Fort", "Desert Safari"],
            category: "Heritage",
            sales_count: 734,
        },
        PackageSeed {
            title: "Ladakh Adventure",
            destination: "Leh-Nubra-Pangong",
            duration: "9 Days 8 Nights",
            price: 38000,
            original_price: 48000,
            image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa",
            rating: 4.6,
            review_count: 198,
            highlights: ["Pangong Lake", "Nubra Valley", "Khardung La", "Monasteries"],
            category: "Adventure",
            sales_count: 567,
        },
    ]
    .into_iter()
    .map(NewTourPackage::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rows_are_featured() {
        assert_eq!(mock_destinations().len(), 6);
        assert_eq!(mock_packages().len(), 6);
        assert!(mock_destinations().iter().all(|d| d.featured));
        assert!(mock_packages().iter().all(|p| p.featured));
    }

    #[test]
    fn test_seed_packages_are_discounted() {
        for pkg in mock_packages() {
            assert!(pkg.original_price > pkg.price, "{} has no discount", pkg.title);
            assert_eq!(pkg.highlights.len(), 4);
        }
    }
}

//! Plain-text rendering of sections, used by the terminal front end.

use std::fmt;

use crate::hero::WordRotator;
use crate::scroll::ScrollToTop;
use crate::section::{DestinationsSection, ErrorBanner, PackagesSection, SectionView};
use crate::view::{DestinationCard, PackageCard, StarRating};

/// Height of one terminal row, in the same units as the scroll threshold.
pub const LINE_HEIGHT: f64 = 24.0;
pub const BACK_TO_TOP: &str = "↑ Back to top";

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for filled in self.slots() {
            f.write_str(if filled { "★" } else { "☆" })?;
        }
        Ok(())
    }
}

fn heart(favorite: bool) -> &'static str {
    if favorite { "♥" } else { "♡" }
}

impl fmt::Display for DestinationCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}, {}", heart(self.favorite), self.name, self.country)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  {} {:.1} ({})", self.stars, self.rating, self.review_line)?;
        writeln!(f, "  {} per person", self.price_label)?;
        write!(f, "  {}", self.image.src)
    }
}

impl fmt::Display for PackageCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} [{}]", heart(self.favorite), self.title, self.category)?;
        writeln!(f, "  {} · {}", self.destination, self.duration)?;
        if !self.highlights.is_empty() {
            write!(f, "  {}", self.highlights.join(", "))?;
            if let Some(more) = &self.more_highlights {
                write!(f, " {}", more)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  {} {:.1} ({})", self.stars, self.rating, self.review_line)?;
        match (&self.original_price_label, self.discount_percent) {
            (Some(original), Some(pct)) => {
                writeln!(f, "  {} (was {}, {}% off)", self.price_label, original, pct)?
            }
            _ => writeln!(f, "  {}", self.price_label)?,
        }
        write!(f, "  {}", self.image.src)
    }
}

impl fmt::Display for ErrorBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.body)
    }
}

impl<C: fmt::Display> fmt::Display for SectionView<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionView::Placeholders(n) => {
                for _ in 0..*n {
                    writeln!(f, "░░░░░░░░░░░░░░░░")?;
                }
                Ok(())
            }
            SectionView::Cards(cards) => {
                for card in cards {
                    writeln!(f, "{}", card)?;
                }
                Ok(())
            }
            SectionView::Error(banner) => writeln!(f, "{}", banner),
        }
    }
}

/// Renders the whole landing page. Reading to the bottom scrolls past the
/// page height, so the back-to-top prompt follows once that passes the
/// threshold.
pub fn page(
    hero: &WordRotator,
    destinations: &DestinationsSection,
    packages: &PackagesSection,
) -> String {
    let mut out = format!("Discover {} India\n\n", hero.current());
    out.push_str(&format!("== {} ==\n{}\n", destinations.heading(), destinations.render()));
    out.push_str(&format!("== {} ==\n{}", packages.heading(), packages.render()));

    let mut scroll = ScrollToTop::new();
    if scroll.on_scroll(out.lines().count() as f64 * LINE_HEIGHT) {
        out.push_str(BACK_TO_TOP);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::view::PACKAGE_FALLBACK_IMAGE;
    use chrono::Utc;
    use tourfriend_shared::NewTourPackage;
    use uuid::Uuid;

    #[test]
    fn test_star_glyphs() {
        assert_eq!(StarRating::from_rating(4.7).to_string(), "★★★★☆");
        assert_eq!(StarRating::from_rating(0.0).to_string(), "☆☆☆☆☆");
    }

    #[test]
    fn test_error_section_text() {
        let view: SectionView<DestinationCard> = SectionView::Error(ErrorBanner {
            title: "Oops! Something went wrong",
            body: "Failed to load destinations. Please try again later.",
        });
        let text = view.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Failed to load destinations"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_shows_back_to_top_only_when_long() {
        let hero = WordRotator::new();
        let mut destinations = DestinationsSection::new("http://localhost:5000");
        let mut packages = PackagesSection::new("http://localhost:5000");
        destinations.listing_mut().begin();
        destinations
            .listing_mut()
            .resolve(Err(ClientError::Api("down".to_string())));
        packages.listing_mut().begin();
        packages
            .listing_mut()
            .resolve(Err(ClientError::Api("down".to_string())));

        let short = page(&hero, &destinations, &packages);
        assert!(short.starts_with("Discover Amazing India"));
        assert!(!short.contains(BACK_TO_TOP));

        let records = (0..6)
            .map(|i| {
                NewTourPackage {
                    title: format!("Tour {}", i),
                    destination: "India".to_string(),
                    duration: "5 Days".to_string(),
                    price: Some(10000),
                    original_price: None,
                    image: None,
                    rating: 4.0,
                    review_count: 1,
                    highlights: vec!["A".to_string()],
                    category: "Culture".to_string(),
                    featured: true,
                    sales_count: 1,
                }
                .into_package(Uuid::new_v4(), Utc::now())
            })
            .collect();
        packages.listing_mut().begin();
        packages.listing_mut().resolve(Ok(records));

        tokio::time::advance(crate::hero::ROTATION_INTERVAL).await;
        let long = page(&hero, &destinations, &packages);
        assert!(long.starts_with("Discover Incredible India"));
        assert!(long.contains(PACKAGE_FALLBACK_IMAGE));
        assert!(long.ends_with("↑ Back to top\n"));
    }
}

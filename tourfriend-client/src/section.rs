use tourfriend_shared::{Destination, TourPackage};
use uuid::Uuid;

use crate::favorites::Favorites;
use crate::fetch::ListingClient;
use crate::state::{Listing, ListingState};
use crate::view::{DestinationCard, PackageCard};

/// Placeholder cards shown while a listing loads.
pub const PLACEHOLDER_CARDS: usize = 8;
pub const ERROR_TITLE: &str = "Oops! Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBanner {
    pub title: &'static str,
    pub body: &'static str,
}

/// What a section shows. Exactly one of the three at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView<C> {
    Placeholders(usize),
    Cards(Vec<C>),
    Error(ErrorBanner),
}

impl<C> SectionView<C> {
    pub fn card_count(&self) -> usize {
        match self {
            SectionView::Cards(cards) => cards.len(),
            _ => 0,
        }
    }

    pub fn placeholder_count(&self) -> usize {
        match self {
            SectionView::Placeholders(n) => *n,
            _ => 0,
        }
    }

    pub fn error_count(&self) -> usize {
        usize::from(matches!(self, SectionView::Error(_)))
    }
}

/// Per-listing presentation: record type, card type and fixed copy.
pub trait SectionKind {
    type Record;
    type Card;

    const HEADING: &'static str;
    const ERROR_BODY: &'static str;

    fn record_id(record: &Self::Record) -> Uuid;
    fn card(record: &Self::Record, base_url: &str, favorite: bool) -> Self::Card;
}

pub struct DestinationsKind;

impl SectionKind for DestinationsKind {
    type Record = Destination;
    type Card = DestinationCard;

    const HEADING: &'static str = "Explore Most Popular Destinations";
    const ERROR_BODY: &'static str = "Failed to load destinations. Please try again later.";

    fn record_id(record: &Destination) -> Uuid {
        record.id
    }

    fn card(record: &Destination, base_url: &str, favorite: bool) -> DestinationCard {
        DestinationCard::new(record, base_url, favorite)
    }
}

pub struct PackagesKind;

impl SectionKind for PackagesKind {
    type Record = TourPackage;
    type Card = PackageCard;

    const HEADING: &'static str = "Top-Selling Tour Packages";
    const ERROR_BODY: &'static str = "Failed to load packages. Please try again later.";

    fn record_id(record: &TourPackage) -> Uuid {
        record.id
    }

    fn card(record: &TourPackage, base_url: &str, favorite: bool) -> PackageCard {
        PackageCard::new(record, base_url, favorite)
    }
}

/// A listing section: its request state plus the visitor's favorites.
pub struct ListingSection<K: SectionKind> {
    listing: Listing<K::Record>,
    favorites: Favorites,
    base_url: String,
}

pub type DestinationsSection = ListingSection<DestinationsKind>;
pub type PackagesSection = ListingSection<PackagesKind>;

impl<K: SectionKind> ListingSection<K> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            listing: Listing::new(),
            favorites: Favorites::new(),
            base_url: base_url.into(),
        }
    }

    pub fn heading(&self) -> &'static str {
        K::HEADING
    }

    pub fn listing(&self) -> &Listing<K::Record> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<K::Record> {
        &mut self.listing
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn toggle_favorite(&mut self, id: Uuid) -> bool {
        self.favorites.toggle(id)
    }

    pub fn render(&self) -> SectionView<K::Card> {
        match self.listing.state() {
            ListingState::Idle | ListingState::Loading => {
                SectionView::Placeholders(PLACEHOLDER_CARDS)
            }
            ListingState::Error { .. } => SectionView::Error(ErrorBanner {
                title: ERROR_TITLE,
                body: K::ERROR_BODY,
            }),
            ListingState::Success(records) => SectionView::Cards(
                records
                    .iter()
                    .map(|record| {
                        let favorite = self.favorites.contains(&K::record_id(record));
                        K::card(record, &self.base_url, favorite)
                    })
                    .collect(),
            ),
        }
    }
}

impl DestinationsSection {
    pub async fn load(&mut self, client: &ListingClient) {
        self.listing.load(client.destinations()).await;
    }
}

impl PackagesSection {
    pub async fn load(&mut self, client: &ListingClient) {
        self.listing.load(client.packages()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use chrono::Utc;
    use tourfriend_shared::NewDestination;

    fn destination(name: &str, rating: f64) -> Destination {
        NewDestination {
            name: name.to_string(),
            country: "India".to_string(),
            image: None,
            rating,
            review_count: 10,
            description: String::new(),
            price: Some(15000),
            featured: true,
        }
        .into_destination(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_loading_shows_placeholders() {
        let mut section = DestinationsSection::new("http://localhost:5000");
        assert_eq!(section.render().placeholder_count(), PLACEHOLDER_CARDS);

        section.listing_mut().begin();
        let view = section.render();
        assert_eq!(view.placeholder_count(), PLACEHOLDER_CARDS);
        assert_eq!(view.card_count(), 0);
    }

    #[test]
    fn test_success_renders_one_card_per_record() {
        let mut section = DestinationsSection::new("http://localhost:5000");
        let records = vec![
            destination("Kerala", 4.9),
            destination("Goa", 4.8),
            destination("Tamil Nadu", 4.5),
        ];
        section.listing_mut().begin();
        section.listing_mut().resolve(Ok(records.clone()));

        let view = section.render();

        assert_eq!(view.card_count(), 3);
        assert_eq!(view.placeholder_count(), 0);
        assert_eq!(view.error_count(), 0);
        if let SectionView::Cards(cards) = view {
            for (card, record) in cards.iter().zip(&records) {
                assert_eq!(card.stars.filled, record.rating.floor() as u8);
                assert_eq!(card.image.src, crate::view::DESTINATION_FALLBACK_IMAGE);
            }
        }
    }

    #[test]
    fn test_error_shows_single_banner() {
        let mut section = PackagesSection::new("http://localhost:5000");
        section.listing_mut().begin();
        section
            .listing_mut()
            .resolve(Err(ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)));

        let view = section.render();

        assert_eq!(view.error_count(), 1);
        assert_eq!(view.card_count(), 0);
        assert_eq!(view.placeholder_count(), 0);
        assert_eq!(
            view,
            SectionView::Error(ErrorBanner {
                title: ERROR_TITLE,
                body: "Failed to load packages. Please try again later.",
            })
        );
    }

    #[test]
    fn test_favorites_mark_cards() {
        let mut section = DestinationsSection::new("http://localhost:5000");
        let goa = destination("Goa", 4.8);
        let goa_id = goa.id;
        section.listing_mut().begin();
        section.listing_mut().resolve(Ok(vec![goa, destination("Kerala", 4.9)]));

        assert!(section.toggle_favorite(goa_id));

        match section.render() {
            SectionView::Cards(cards) => {
                assert!(cards[0].favorite);
                assert!(!cards[1].favorite);
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }
}

//! Scraping client for the MyAnimeList seasonal anime listing.
//!
//! One network call followed by one synchronous extraction pass:
//! [`client::SeasonClient`] fetches the listing page and
//! [`extract::extract_listing`] maps every matched item into a
//! [`model::SeasonalAnime`] record, in document order.

pub mod client;
pub mod error;
pub mod extract;
pub mod model;

/// Identifying information for the scraped site.
#[derive(Clone, Debug)]
pub struct SiteInfo {
    /// Human readable site name, e.g., "MyAnimeList".
    pub name: String,
    /// site.tld
    pub domain: String,
    /// https://site.tld
    pub base_url: String,
}

//! mal-season - A scraping client for MyAnimeList seasonal listings.
//!
//! Fetches a seasonal listing page and extracts one structured record per
//! listed anime: title, air date, episode stats, genres, studios, score and
//! member count.

pub mod season;

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

/// One anime entry scraped from a seasonal listing page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeasonalAnime {
    /// Human readable title, e.g., "Sousou no Frieren".
    pub title: String,
    /// Url of the series page, e.g., "https://myanimelist.net/anime/52991/Sousou_no_Frieren".
    pub link: String,
    /// First air date, when the listing carries a parseable one.
    pub air_date: Option<DateTime<Utc>>,
    /// Total episode count. Absent while the site still shows a placeholder.
    pub episode_count: Option<u32>,
    /// Episode length in minutes.
    pub episode_duration: Option<u32>,
    /// Genre names in listing order. May be empty.
    pub genres: Vec<String>,
    /// Cover image url.
    pub image: String,
    pub synopsis: String,
    /// Studios in listing order. May be empty.
    pub studios: Vec<Studio>,
    /// Community score out of 10. Absent while the series is unrated.
    pub score: Option<f64>,
    /// Number of members tracking the series.
    pub members: u64,
}

/// A studio credited on a listing entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Studio {
    pub name: String,
    /// Url of the studio page, e.g., "/anime/producer/11/Madhouse".
    pub href: String,
}

/// Broadcast season of the anime calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// The lowercase name the site uses in listing urls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

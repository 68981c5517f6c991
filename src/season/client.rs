//! MyAnimeList seasonal listing client.

use log::debug;
use log::info;
use wreq::Client;

use crate::season::SiteInfo;
use crate::season::error::ScrapeError;
use crate::season::extract;
use crate::season::model::Season;
use crate::season::model::SeasonalAnime;

/// Client for the MyAnimeList seasonal listing pages.
pub struct SeasonClient {
    pub info: SiteInfo,
    client: Client,
}

impl SeasonClient {
    pub fn new() -> Self {
        Self::with_base_url("https://myanimelist.net")
    }

    /// Creates a client against a custom base url. Used to point tests at a
    /// mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let info = SiteInfo {
            name: "MyAnimeList".to_string(),
            domain: "myanimelist.net".to_string(),
            base_url: base_url.into(),
        };
        let client = Client::builder()
            .emulation(wreq_util::Emulation::Chrome137)
            .build()
            .expect("Failed to create client");

        Self { info, client }
    }

    /// Fetches the seasonal listing and extracts one record per listed anime.
    ///
    /// With no target the site serves the current season; pass a
    /// `(year, season)` pair for a specific one.
    pub async fn fetch_season(
        &self,
        target: Option<(u16, Season)>,
    ) -> Result<Vec<SeasonalAnime>, ScrapeError> {
        let url = self.season_url(target);
        debug!("Fetching {} listing from: {url}", self.info.name);

        let request = self.client.get(url);
        let response = self.send(request).await?;
        let body = response.text().await?;

        let entries = extract::extract_listing(&body)?;
        info!(
            "Extracted {} seasonal entries from {}",
            entries.len(),
            self.info.name
        );
        Ok(entries)
    }

    fn season_url(&self, target: Option<(u16, Season)>) -> String {
        match target {
            Some((year, season)) => {
                format!("{}/anime/season/{year}/{season}", self.info.base_url)
            }
            None => format!("{}/anime/season", self.info.base_url),
        }
    }

    async fn send(&self, request: wreq::RequestBuilder) -> Result<wreq::Response, wreq::Error> {
        let req = request.build()?;
        debug!("Making request to: {}", req.url());
        self.client.execute(req).await
    }
}

impl Default for SeasonClient {
    fn default() -> Self {
        Self::new()
    }
}

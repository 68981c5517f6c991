//! HTML extraction for the seasonal listing page.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use log::debug;
use scraper::ElementRef;
use scraper::Html;
use scraper::Selector;

use crate::season::error::ScrapeError;
use crate::season::model::SeasonalAnime;
use crate::season::model::Studio;

/// Date format used by the listing, e.g., "Apr 03, 2024".
const DATE_FORMAT: &str = "%b %d, %Y";

/// Extracts every anime entry from a seasonal listing document.
///
/// Returns one record per matched listing item, in document order. A missing
/// required node fails the whole call; values that are present but not
/// parseable (air date, score, episode numbers) only leave that field empty.
pub fn extract_listing(html: &str) -> Result<Vec<SeasonalAnime>, ScrapeError> {
    let document = Html::parse_document(html);

    let entries = document
        .select(&css(".js-seasonal-anime"))
        .map(extract_entry)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Matched {} listing items", entries.len());
    Ok(entries)
}

fn extract_entry(item: ElementRef<'_>) -> Result<SeasonalAnime, ScrapeError> {
    let (title, link) = get_title_link(item)?;
    let (date_item, episodes_item) = get_info_items(item)?;
    let air_date = parse_air_date(&text_of(date_item));
    let (episode_count, episode_duration) = get_episode_stats(episodes_item);

    Ok(SeasonalAnime {
        title,
        link,
        air_date,
        episode_count,
        episode_duration,
        genres: get_genres(item),
        image: get_image(item)?,
        synopsis: get_synopsis(item)?,
        studios: get_studios(item)?,
        score: get_score(item)?,
        members: get_members(item)?,
    })
}

fn get_title_link(item: ElementRef<'_>) -> Result<(String, String), ScrapeError> {
    let anchor = item
        .select(&css("h2 a"))
        .next()
        .ok_or_else(|| missing("h2 a"))?;

    let link = anchor
        .value()
        .attr("href")
        .ok_or_else(|| missing("h2 a[href]"))?
        .to_string();
    Ok((text_of(anchor), link))
}

/// The info block carries two items: the air date and the episode stats.
fn get_info_items(
    item: ElementRef<'_>,
) -> Result<(ElementRef<'_>, ElementRef<'_>), ScrapeError> {
    let info = item
        .select(&css(".prodsrc .info"))
        .next()
        .ok_or_else(|| missing(".prodsrc .info"))?;

    let sel = css(".item");
    let mut items = info.select(&sel);
    let date = items
        .next()
        .ok_or_else(|| missing(".info .item (air date)"))?;
    let episodes = items
        .next()
        .ok_or_else(|| missing(".info .item (episode stats)"))?;
    Ok((date, episodes))
}

fn parse_air_date(text: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Leading numeric token of each stat span, in order: count then duration.
fn get_episode_stats(item: ElementRef<'_>) -> (Option<u32>, Option<u32>) {
    let sel = css("span");
    let mut spans = item.select(&sel);
    let count = spans.next().and_then(leading_number);
    let duration = spans.next().and_then(leading_number);
    (count, duration)
}

/// Placeholders like "? eps" and zero counts both read as absent.
fn leading_number(el: ElementRef<'_>) -> Option<u32> {
    let text = text_of(el);
    let token = text.split_whitespace().next()?;
    token.parse::<u32>().ok().filter(|n| *n > 0)
}

fn get_genres(item: ElementRef<'_>) -> Vec<String> {
    item.select(&css(".genre a"))
        .filter_map(|a| a.value().attr("title").map(str::to_string))
        .collect()
}

fn get_image(item: ElementRef<'_>) -> Result<String, ScrapeError> {
    let img = item
        .select(&css("img"))
        .next()
        .ok_or_else(|| missing("img"))?;

    // Lazy loaded covers leave `src` empty and carry the url in `data-src`.
    img.value()
        .attr("src")
        .filter(|src| !src.is_empty())
        .or_else(|| img.value().attr("data-src"))
        .map(str::to_string)
        .ok_or_else(|| missing("img[src], img[data-src]"))
}

fn get_synopsis(item: ElementRef<'_>) -> Result<String, ScrapeError> {
    let block = item
        .select(&css(".synopsis .preline"))
        .next()
        .ok_or_else(|| missing(".synopsis .preline"))?;
    Ok(text_of(block).trim().to_string())
}

/// Studios live in the first property block under the synopsis; later blocks
/// hold source and theme credits.
fn get_studios(item: ElementRef<'_>) -> Result<Vec<Studio>, ScrapeError> {
    let property = item
        .select(&css(".synopsis .properties .property"))
        .next()
        .ok_or_else(|| missing(".synopsis .properties .property"))?;

    let studios = property
        .select(&css(".item a"))
        .filter_map(|a| {
            let name = a.value().attr("title")?;
            let href = a.value().attr("href")?;
            Some(Studio {
                name: name.to_string(),
                href: href.to_string(),
            })
        })
        .collect();
    Ok(studios)
}

/// The score node always renders; unrated series show a placeholder ("N/A").
fn get_score(item: ElementRef<'_>) -> Result<Option<f64>, ScrapeError> {
    let node = item
        .select(&css(".score"))
        .next()
        .ok_or_else(|| missing(".score"))?;
    Ok(text_of(node).trim().parse::<f64>().ok())
}

fn get_members(item: ElementRef<'_>) -> Result<u64, ScrapeError> {
    let node = item
        .select(&css(".member"))
        .next()
        .ok_or_else(|| missing(".member"))?;

    let text = text_of(node);
    let trimmed = text.trim();
    trimmed
        .replace(',', "")
        .parse::<u64>()
        .map_err(|_| ScrapeError::InvalidMemberCount {
            text: trimmed.to_string(),
        })
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn missing(field: &str) -> ScrapeError {
    ScrapeError::MissingField {
        field: field.to_string(),
    }
}

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("static selector")
}

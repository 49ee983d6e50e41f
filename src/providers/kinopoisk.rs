use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::fetcher::{FetchError, PageResponse, fetch_page, read_text, send_checked};
use crate::model::SourceIdentifier;
use crate::providers::errors::ProviderError;

const API_KEY_HEADER: &str = "X-API-KEY";

/// Client for the Kinopoisk side of the pipeline: the public search-results
/// page plus the unofficial JSON API (keyword search and film details).
/// Base URLs and the API key are injected at construction so tests can point
/// everything at a mock server.
#[derive(Debug, Clone)]
pub struct KinopoiskClient {
    http: Client,
    page_base: Url,
    api_base: Url,
    api_key: String,
}

impl KinopoiskClient {
    pub fn new(http: Client, page_base: Url, api_base: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            page_base,
            api_base,
            api_key: api_key.into(),
        }
    }

    /// Fetch the HTML search-results page for a free-text query.
    #[instrument(skip(self))]
    pub async fn search_page(&self, query: &str) -> Result<PageResponse, ProviderError> {
        let mut url = self
            .page_base
            .join("index.php")
            .map_err(FetchError::from)?;
        url.query_pairs_mut().append_pair("kp_query", query);

        Ok(fetch_page(&self.http, url).await?)
    }

    /// Keyword search against the JSON API. This is the fallback leg for
    /// queries the page scrape could not place; the endpoint is quota
    /// limited, so it must only be called after a scrape miss.
    #[instrument(skip(self))]
    pub async fn search_by_keyword(
        &self,
        query: &str,
    ) -> Result<Option<SourceIdentifier>, ProviderError> {
        let mut url = self
            .api_base
            .join("api/v2.1/films/search-by-keyword")
            .map_err(FetchError::from)?;
        url.query_pairs_mut().append_pair("keyword", query);

        let request = self.http.get(url).header(API_KEY_HEADER, &self.api_key);
        let body = read_text(send_checked(request).await?).await?;
        let parsed: KeywordSearchResponse =
            serde_json::from_str(&body).map_err(ProviderError::malformed("search-by-keyword"))?;

        let Some(hit) = parsed.films.into_iter().next() else {
            return Ok(None);
        };
        // A hit without an id cannot be fetched, so it counts as a miss
        let Some(film_id) = hit.film_id else {
            return Ok(None);
        };

        let display_title = [hit.name_en, hit.name_ru]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or_default();

        Ok(Some(SourceIdentifier {
            provider_id: film_id.to_string(),
            display_title,
        }))
    }

    /// Fetch the full film record for a provider id. The payload is handed
    /// to the normalizer as-is; nothing here checks field presence.
    #[instrument(skip(self))]
    pub async fn film_details(&self, provider_id: &str) -> Result<FilmDetails, ProviderError> {
        let url = self
            .api_base
            .join(&format!("api/v2.2/films/{provider_id}"))
            .map_err(FetchError::from)?;

        let request = self.http.get(url).header(API_KEY_HEADER, &self.api_key);
        let body = read_text(send_checked(request).await?).await?;

        serde_json::from_str(&body).map_err(ProviderError::malformed("film details"))
    }
}

#[derive(Debug, Deserialize)]
struct KeywordSearchResponse {
    #[serde(default)]
    films: Vec<KeywordHit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeywordHit {
    film_id: Option<i64>,
    name_en: Option<String>,
    name_ru: Option<String>,
}

/// Film record as served by `/api/v2.2/films/{id}`. Every field the
/// normalizer reads is optional; the API sends explicit nulls freely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilmDetails {
    pub name_ru: Option<String>,
    pub name_original: Option<String>,
    pub name_en: Option<String>,
    pub year: Option<i32>,
    pub rating_age_limits: Option<String>,
    pub film_length: Option<u32>,
    pub genres: Option<Vec<GenreEntry>>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub poster_url: Option<String>,
    pub poster_url_preview: Option<String>,
    pub rating_kinopoisk: Option<f64>,
    pub rating_imdb: Option<f64>,
    pub rating_film_critics: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreEntry {
    pub genre: String,
}

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::fetcher::{read_text, send_checked};
use crate::providers::errors::ProviderError;

/// Client for the OMDb catalog, used to enrich a resolved film by its
/// original title. Title search first, then a detail lookup for the top hit.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    base: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(http: Client, base: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base,
            api_key: api_key.into(),
        }
    }

    /// Search by title and fetch the full record of the best match.
    /// `Ok(None)` means the catalog simply has no entry for the title.
    #[instrument(skip(self))]
    pub async fn find_by_title(&self, title: &str) -> Result<Option<OmdbMovie>, ProviderError> {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("s", title);

        let body = read_text(send_checked(self.http.get(url)).await?).await?;
        let parsed: OmdbSearchResponse =
            serde_json::from_str(&body).map_err(ProviderError::malformed("omdb search"))?;

        let Some(hit) = parsed.search.into_iter().next() else {
            return Ok(None);
        };

        Ok(Some(self.details(&hit.imdb_id).await?))
    }

    async fn details(&self, imdb_id: &str) -> Result<OmdbMovie, ProviderError> {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("i", imdb_id);

        let body = read_text(send_checked(self.http.get(url)).await?).await?;

        serde_json::from_str(&body).map_err(ProviderError::malformed("omdb details"))
    }
}

// OMDb answers "no match" as a 200 with {"Response": "False"} and no Search
// key, so the search list defaults to empty.
#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchHit>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchHit {
    #[serde(rename = "imdbID")]
    imdb_id: String,
}

/// Full movie record as served by OMDb. Field values use the provider's own
/// "N/A" sentinel; the normalizer translates that away.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbMovie {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    pub ratings: Vec<OmdbRating>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    pub metascore: Option<String>,
    pub box_office: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

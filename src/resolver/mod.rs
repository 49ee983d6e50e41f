use tracing::{info, instrument};
use url::Url;

use crate::config::Config;
use crate::extractor;
use crate::fetcher;
use crate::model::{Resolution, ResolvedMovie};
use crate::normalize;
use crate::providers::{KinopoiskClient, OmdbClient, ProviderError};

/// Sequences the whole query-to-record pipeline: page scrape, keyword
/// fallback, detail fetch, normalization, cross-catalog enrichment.
///
/// Stages run strictly one after another: every later call depends on the
/// previous outcome, and the JSON endpoints are rate limited. One `resolve`
/// call per user request; instances share no mutable state.
#[derive(Debug, Clone)]
pub struct Resolver {
    kinopoisk: KinopoiskClient,
    omdb: OmdbClient,
    watch_base: Url,
}

impl Resolver {
    pub fn new(kinopoisk: KinopoiskClient, omdb: OmdbClient, watch_base: Url) -> Self {
        Self {
            kinopoisk,
            omdb,
            watch_base,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, url::ParseError> {
        let http = fetcher::shared_client();
        let kinopoisk = KinopoiskClient::new(
            http.clone(),
            Url::parse(config.kinopoisk_page_url())?,
            Url::parse(config.kinopoisk_api_url())?,
            config.kinopoisk_api_key(),
        );
        let omdb = OmdbClient::new(
            http,
            Url::parse(config.omdb_api_url())?,
            config.omdb_api_key(),
        );
        Ok(Self::new(kinopoisk, omdb, Url::parse(config.watch_base_url())?))
    }

    /// Resolve a free-text movie query into a watch link plus canonical card.
    ///
    /// `NoResult` means no source matched; any transport or parse failure
    /// along the way aborts the resolution with no partial record and no
    /// retry (retrying is the caller's call).
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Resolution, ProviderError> {
        let page = self.kinopoisk.search_page(query).await?;

        let identifier = match extractor::most_wanted(&page.body_utf8) {
            Some(identifier) => identifier,
            // Fallback leg, only reached on a scrape miss; the keyword
            // endpoint is quota limited
            None => match self.kinopoisk.search_by_keyword(query).await? {
                Some(identifier) => identifier,
                None => return Ok(Resolution::NoResult),
            },
        };
        info!(
            provider_id = %identifier.provider_id,
            title = %identifier.display_title,
            "search produced a candidate"
        );

        let details = self.kinopoisk.film_details(&identifier.provider_id).await?;
        let mut card = normalize::from_kinopoisk(&details);

        // When the search surfaced an original title, a hit in the second
        // catalog replaces the card wholesale rather than merging into it.
        if !identifier.display_title.is_empty() {
            if let Some(movie) = self.omdb.find_by_title(&identifier.display_title).await? {
                card = normalize::from_omdb(&movie);
            }
        }

        Ok(Resolution::Resolved(ResolvedMovie {
            watch_url: self.watch_url(&identifier.provider_id),
            display_title: identifier.display_title,
            card,
        }))
    }

    fn watch_url(&self, provider_id: &str) -> String {
        format!(
            "{}/film/{}",
            self.watch_base.as_str().trim_end_matches('/'),
            provider_id
        )
    }
}

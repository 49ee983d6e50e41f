use std::fmt::{Display, Formatter};

/// A provider-side film identifier paired with the display title shown next
/// to it in the search results. The id is opaque to every stage after the
/// search; the title may be empty when the provider did not supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdentifier {
    pub provider_id: String,
    pub display_title: String,
}

/// One canonical-record field. `Unknown` stands in for the providers'
/// assorted missing/empty/"N/A" markers so that nothing downstream has to
/// string-match a sentinel; a renderer picks its own placeholder via
/// [`FieldValue::display_or`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Known(String),
    Unknown,
}

impl FieldValue {
    pub fn known(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    /// `Known` only for a present, non-empty value.
    pub fn from_nonempty(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::Known(v.to_string()),
            _ => Self::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn display_or<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Self::Known(v) => v,
            Self::Unknown => sentinel,
        }
    }
}

/// The closed vocabulary of rating origins a canonical record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSource {
    Kinopoisk,
    InternetMovieDatabase,
    FilmCritics,
    RottenTomatoes,
    Metascore,
}

impl RatingSource {
    /// Parse a provider's rating-source label. OMDb calls its aggregate
    /// score "Metacritic"; everything else matches the display label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Kinopoisk" => Some(Self::Kinopoisk),
            "Internet Movie Database" => Some(Self::InternetMovieDatabase),
            "Film Critics" => Some(Self::FilmCritics),
            "Rotten Tomatoes" => Some(Self::RottenTomatoes),
            "Metacritic" | "Metascore" => Some(Self::Metascore),
            _ => None,
        }
    }
}

impl Display for RatingSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Kinopoisk => "Kinopoisk",
            Self::InternetMovieDatabase => "Internet Movie Database",
            Self::FilmCritics => "Film Critics",
            Self::RottenTomatoes => "Rotten Tomatoes",
            Self::Metascore => "Metascore",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub source: RatingSource,
    pub value: String,
}

/// The single normalized movie schema every provider is mapped into.
/// Every field is structurally present; absent provider data shows up as
/// `FieldValue::Unknown`, never as a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: FieldValue,
    pub year: FieldValue,
    pub rated: FieldValue,
    pub runtime: FieldValue,
    pub genre: FieldValue,
    pub director: FieldValue,
    pub actors: FieldValue,
    pub plot: FieldValue,
    pub poster: FieldValue,
    pub ratings: Vec<Rating>,
    pub imdb_rating: FieldValue,
    pub box_office: FieldValue,
    pub metascore: FieldValue,
}

impl MovieCard {
    /// The all-unknown card with an empty ratings list.
    pub fn unknown() -> Self {
        Self {
            title: FieldValue::Unknown,
            year: FieldValue::Unknown,
            rated: FieldValue::Unknown,
            runtime: FieldValue::Unknown,
            genre: FieldValue::Unknown,
            director: FieldValue::Unknown,
            actors: FieldValue::Unknown,
            plot: FieldValue::Unknown,
            poster: FieldValue::Unknown,
            ratings: Vec::new(),
            imdb_rating: FieldValue::Unknown,
            box_office: FieldValue::Unknown,
            metascore: FieldValue::Unknown,
        }
    }
}

/// A successfully resolved query: watch link, the display title the search
/// surfaced, and the normalized card. The three always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMovie {
    pub watch_url: String,
    pub display_title: String,
    pub card: MovieCard,
}

/// Terminal outcome of a resolution. `NoResult` is an expected branch
/// (nothing matched anywhere), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedMovie),
    NoResult,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn as_resolved(&self) -> Option<&ResolvedMovie> {
        match self {
            Self::Resolved(movie) => Some(movie),
            Self::NoResult => None,
        }
    }
}

/// One recorded lookup, as stored by the history store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_name: String,
    pub query: String,
    pub original_title: String,
}

/// A resolved title with how many times it was looked up.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TitleCount {
    pub original_title: String,
    pub shows: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_nonempty_rejects_blank_values() {
        assert_eq!(FieldValue::from_nonempty(None), FieldValue::Unknown);
        assert_eq!(FieldValue::from_nonempty(Some("")), FieldValue::Unknown);
        assert_eq!(FieldValue::from_nonempty(Some("   ")), FieldValue::Unknown);
        assert_eq!(
            FieldValue::from_nonempty(Some("Dune")),
            FieldValue::known("Dune")
        );
    }

    #[test]
    fn display_or_substitutes_sentinel() {
        assert_eq!(FieldValue::Unknown.display_or("N/A"), "N/A");
        assert_eq!(FieldValue::known("8.8").display_or("N/A"), "8.8");
    }

    #[test]
    fn rating_source_labels_round_trip() {
        for source in [
            RatingSource::Kinopoisk,
            RatingSource::InternetMovieDatabase,
            RatingSource::FilmCritics,
            RatingSource::RottenTomatoes,
        ] {
            assert_eq!(RatingSource::from_label(&source.to_string()), Some(source));
        }
        // OMDb spells the aggregate score differently than we display it.
        assert_eq!(
            RatingSource::from_label("Metacritic"),
            Some(RatingSource::Metascore)
        );
        assert_eq!(RatingSource::from_label("Letterboxd"), None);
    }

    #[test]
    fn unknown_card_has_no_ratings() {
        let card = MovieCard::unknown();
        assert!(card.ratings.is_empty());
        assert!(!card.title.is_known());
        assert!(!card.metascore.is_known());
    }
}

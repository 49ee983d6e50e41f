//! Translation boundary between provider payloads and the canonical card.
//!
//! Provider-specific field names stop here: nothing outside this module sees
//! a Kinopoisk or OMDb schema. Both mappings are pure and total; a payload
//! with every field missing still produces a full card of `Unknown`s.

use crate::model::{FieldValue, MovieCard, Rating, RatingSource};
use crate::providers::kinopoisk::FilmDetails;
use crate::providers::omdb::OmdbMovie;

/// Map a Kinopoisk film record into the canonical card.
pub fn from_kinopoisk(details: &FilmDetails) -> MovieCard {
    let mut card = MovieCard::unknown();

    card.title = first_nonempty([
        details.name_ru.as_deref(),
        details.name_original.as_deref(),
        details.name_en.as_deref(),
    ]);

    card.year = match details.year {
        Some(year) => FieldValue::known(year.to_string()),
        None => FieldValue::Unknown,
    };

    // "age16" -> "16+"
    card.rated = match details.rating_age_limits.as_deref() {
        Some(tag) if !tag.is_empty() => {
            let digits = tag.trim_start_matches(|c: char| !c.is_ascii_digit());
            FieldValue::known(format!("{digits}+"))
        }
        _ => FieldValue::Unknown,
    };

    card.runtime = match details.film_length {
        Some(minutes) if minutes > 0 => FieldValue::known(minutes.to_string()),
        _ => FieldValue::Unknown,
    };

    card.genre = match details.genres.as_deref() {
        Some(genres) if !genres.is_empty() => FieldValue::known(
            genres
                .iter()
                .map(|entry| capitalize(&entry.genre))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => FieldValue::Unknown,
    };

    card.plot = first_nonempty([
        details.description.as_deref(),
        details.short_description.as_deref(),
    ]);

    card.poster = first_nonempty([
        details.poster_url.as_deref(),
        details.poster_url_preview.as_deref(),
    ]);

    // Fixed order; absent or zero ratings are omitted outright
    for (source, value) in [
        (RatingSource::Kinopoisk, details.rating_kinopoisk),
        (RatingSource::InternetMovieDatabase, details.rating_imdb),
        (RatingSource::FilmCritics, details.rating_film_critics),
    ] {
        if let Some(value) = value
            && value != 0.0
        {
            card.ratings.push(Rating {
                source,
                value: format!("{value}/10"),
            });
        }
    }

    card.imdb_rating = match details.rating_imdb {
        Some(value) => FieldValue::known(value.to_string()),
        None => FieldValue::Unknown,
    };

    // The detail endpoint carries no credits or box-office data, so these
    // stay Unknown on this path.
    card
}

/// Map an OMDb movie record into the canonical card. OMDb marks missing
/// data with a literal "N/A", which becomes `Unknown` here and nowhere else.
pub fn from_omdb(movie: &OmdbMovie) -> MovieCard {
    let mut card = MovieCard::unknown();

    card.title = omdb_field(movie.title.as_deref());
    card.year = omdb_field(movie.year.as_deref());
    card.rated = omdb_field(movie.rated.as_deref());
    card.runtime = omdb_field(movie.runtime.as_deref());
    card.genre = omdb_field(movie.genre.as_deref());
    card.director = omdb_field(movie.director.as_deref());
    card.actors = omdb_field(movie.actors.as_deref());
    card.plot = omdb_field(movie.plot.as_deref());
    card.poster = omdb_field(movie.poster.as_deref());
    card.imdb_rating = omdb_field(movie.imdb_rating.as_deref());
    card.box_office = omdb_field(movie.box_office.as_deref());
    card.metascore = omdb_field(movie.metascore.as_deref());

    card.ratings = movie
        .ratings
        .iter()
        .filter_map(|rating| {
            RatingSource::from_label(&rating.source).map(|source| Rating {
                source,
                value: rating.value.clone(),
            })
        })
        .collect();

    card
}

fn first_nonempty<const N: usize>(candidates: [Option<&str>; N]) -> FieldValue {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .map(FieldValue::known)
        .unwrap_or(FieldValue::Unknown)
}

fn omdb_field(value: Option<&str>) -> FieldValue {
    match value {
        Some(v) if !v.trim().is_empty() && v != "N/A" => FieldValue::known(v),
        _ => FieldValue::Unknown,
    }
}

// Python-style capitalize: first letter upper, the rest lower. Genre names
// arrive lowercased ("фантастика") but the API does not promise it.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::kinopoisk::GenreEntry;
    use crate::providers::omdb::OmdbRating;

    #[test]
    fn empty_payload_normalizes_to_all_unknown() {
        let card = from_kinopoisk(&FilmDetails::default());
        assert_eq!(card, MovieCard::unknown());
        assert!(card.ratings.is_empty());
    }

    #[test]
    fn title_prefers_russian_then_original_then_english() {
        let mut details = FilmDetails {
            name_ru: Some("Начало".into()),
            name_original: Some("Inception".into()),
            name_en: Some("Inception (en)".into()),
            ..Default::default()
        };
        assert_eq!(from_kinopoisk(&details).title, FieldValue::known("Начало"));

        details.name_ru = None;
        assert_eq!(
            from_kinopoisk(&details).title,
            FieldValue::known("Inception")
        );

        details.name_original = Some("".into());
        assert_eq!(
            from_kinopoisk(&details).title,
            FieldValue::known("Inception (en)")
        );
    }

    #[test]
    fn age_limit_tag_becomes_rated() {
        let details = FilmDetails {
            rating_age_limits: Some("age16".into()),
            ..Default::default()
        };
        assert_eq!(from_kinopoisk(&details).rated, FieldValue::known("16+"));
    }

    #[test]
    fn zero_length_runtime_is_unknown() {
        let details = FilmDetails {
            film_length: Some(0),
            ..Default::default()
        };
        assert_eq!(from_kinopoisk(&details).runtime, FieldValue::Unknown);

        let details = FilmDetails {
            film_length: Some(148),
            ..Default::default()
        };
        assert_eq!(from_kinopoisk(&details).runtime, FieldValue::known("148"));
    }

    #[test]
    fn genres_are_capitalized_and_joined() {
        let details = FilmDetails {
            genres: Some(vec![
                GenreEntry {
                    genre: "фантастика".into(),
                },
                GenreEntry {
                    genre: "БОЕВИК".into(),
                },
            ]),
            ..Default::default()
        };
        assert_eq!(
            from_kinopoisk(&details).genre,
            FieldValue::known("Фантастика, Боевик")
        );

        let details = FilmDetails {
            genres: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(from_kinopoisk(&details).genre, FieldValue::Unknown);
    }

    #[test]
    fn plot_falls_back_to_short_description() {
        let details = FilmDetails {
            short_description: Some("Вор проникает в сны.".into()),
            ..Default::default()
        };
        assert_eq!(
            from_kinopoisk(&details).plot,
            FieldValue::known("Вор проникает в сны.")
        );
    }

    #[test]
    fn poster_falls_back_to_preview() {
        let details = FilmDetails {
            poster_url_preview: Some("https://img.example/preview.jpg".into()),
            ..Default::default()
        };
        assert_eq!(
            from_kinopoisk(&details).poster,
            FieldValue::known("https://img.example/preview.jpg")
        );
    }

    #[test]
    fn ratings_keep_fixed_order_and_format() {
        let details = FilmDetails {
            rating_kinopoisk: Some(8.1),
            rating_imdb: Some(8.8),
            rating_film_critics: Some(7.4),
            ..Default::default()
        };
        let card = from_kinopoisk(&details);
        assert_eq!(
            card.ratings,
            vec![
                Rating {
                    source: RatingSource::Kinopoisk,
                    value: "8.1/10".into()
                },
                Rating {
                    source: RatingSource::InternetMovieDatabase,
                    value: "8.8/10".into()
                },
                Rating {
                    source: RatingSource::FilmCritics,
                    value: "7.4/10".into()
                },
            ]
        );
        assert_eq!(card.imdb_rating, FieldValue::known("8.8"));
    }

    #[test]
    fn absent_rating_sources_are_omitted_not_defaulted() {
        let details = FilmDetails {
            rating_kinopoisk: Some(8.1),
            rating_imdb: Some(8.8),
            ..Default::default()
        };
        let card = from_kinopoisk(&details);
        assert_eq!(card.ratings.len(), 2);
        assert_eq!(card.ratings[0].source, RatingSource::Kinopoisk);
        assert_eq!(card.ratings[0].value, "8.1/10");
        assert_eq!(card.ratings[1].source, RatingSource::InternetMovieDatabase);
        assert_eq!(card.ratings[1].value, "8.8/10");

        let zeroed = FilmDetails {
            rating_kinopoisk: Some(0.0),
            ..Default::default()
        };
        assert!(from_kinopoisk(&zeroed).ratings.is_empty());
    }

    #[test]
    fn credits_and_box_office_stay_unknown_on_kinopoisk_path() {
        let details = FilmDetails {
            name_ru: Some("Начало".into()),
            ..Default::default()
        };
        let card = from_kinopoisk(&details);
        assert_eq!(card.director, FieldValue::Unknown);
        assert_eq!(card.actors, FieldValue::Unknown);
        assert_eq!(card.box_office, FieldValue::Unknown);
        assert_eq!(card.metascore, FieldValue::Unknown);
    }

    #[test]
    fn omdb_sentinels_become_unknown() {
        let movie = OmdbMovie {
            title: Some("Inception".into()),
            director: Some("N/A".into()),
            actors: Some("".into()),
            ..Default::default()
        };
        let card = from_omdb(&movie);
        assert_eq!(card.title, FieldValue::known("Inception"));
        assert_eq!(card.director, FieldValue::Unknown);
        assert_eq!(card.actors, FieldValue::Unknown);
    }

    #[test]
    fn omdb_ratings_map_the_provider_vocabulary() {
        let movie = OmdbMovie {
            ratings: vec![
                OmdbRating {
                    source: "Internet Movie Database".into(),
                    value: "8.8/10".into(),
                },
                OmdbRating {
                    source: "Rotten Tomatoes".into(),
                    value: "87%".into(),
                },
                OmdbRating {
                    source: "Metacritic".into(),
                    value: "74/100".into(),
                },
                OmdbRating {
                    source: "Letterboxd".into(),
                    value: "4.2/5".into(),
                },
            ],
            ..Default::default()
        };
        let card = from_omdb(&movie);
        assert_eq!(
            card.ratings,
            vec![
                Rating {
                    source: RatingSource::InternetMovieDatabase,
                    value: "8.8/10".into()
                },
                Rating {
                    source: RatingSource::RottenTomatoes,
                    value: "87%".into()
                },
                Rating {
                    source: RatingSource::Metascore,
                    value: "74/100".into()
                },
            ]
        );
    }
}

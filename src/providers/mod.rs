pub mod errors;
pub mod kinopoisk;
pub mod omdb;

pub use errors::ProviderError;
pub use kinopoisk::{FilmDetails, KinopoiskClient};
pub use omdb::{OmdbClient, OmdbMovie};

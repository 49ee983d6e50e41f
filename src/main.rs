//! Minimal CLI front end: resolve a title, or list per-user history/stats.
//! Everything interesting happens in the library; this file only renders.

use anyhow::bail;
use std::path::Path;

use kinoseek::config::Config;
use kinoseek::history::{DEFAULT_PAGE_LIMIT, HistoryStore};
use kinoseek::model::{Resolution, ResolvedMovie};
use kinoseek::resolver::Resolver;
use kinoseek::text::times_word;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("history") => show_history(&config).await,
        Some("stats") => show_stats(&config).await,
        Some(_) => search(&config, &args.join(" ")).await,
        None => bail!("usage: kinoseek <movie title> | history | stats"),
    }
}

fn current_user() -> String {
    std::env::var("USER").unwrap_or_else(|_| "local".to_string())
}

async fn search(config: &Config, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Вы ввели пустой запрос. Попробуйте еще раз");
    }

    let resolver = Resolver::from_config(config)?;
    match resolver.resolve(query).await? {
        Resolution::Resolved(movie) => {
            print_card(&movie);

            // The result is already on screen; failing to log the lookup
            // must not take it away.
            let title = movie.card.title.display_or("Не найдено").to_string();
            match HistoryStore::open(Path::new(config.database_path())).await {
                Ok(store) => {
                    if let Err(err) = store.record(&current_user(), query, &title).await {
                        tracing::warn!("failed to record lookup: {err}");
                    }
                }
                Err(err) => tracing::warn!("history store unavailable: {err}"),
            }
        }
        Resolution::NoResult => {
            println!("По вашему запросу ничего не найдено. Попробуйте поискать другой фильм");
        }
    }

    Ok(())
}

fn print_card(movie: &ResolvedMovie) {
    let card = &movie.card;

    println!(
        "{} ({})",
        card.title.display_or("Неизвестно"),
        card.year.display_or("N/A")
    );
    println!();
    println!("Рейтинги:");
    println!("  IMDb: {}", card.imdb_rating.display_or("N/A"));
    for rating in &card.ratings {
        println!("  {}: {}", rating.source, rating.value);
    }
    println!("  Metascore: {}", card.metascore.display_or("N/A"));
    println!();
    println!("Жанр: {}", card.genre.display_or("Неизвестно"));
    println!("Время: {}", card.runtime.display_or("Неизвестно"));
    println!("Возраст: {}", card.rated.display_or("N/A"));
    println!("Режиссёр: {}", card.director.display_or("Неизвестно"));
    println!("Актёры: {}", card.actors.display_or("Неизвестно"));
    println!("Сборы: {}", card.box_office.display_or("N/A"));
    println!();
    println!("Сюжет:");
    println!("{}", card.plot.display_or("Описание отсутствует"));
    println!();
    println!("Постер: {}", card.poster.display_or("N/A"));
    println!("Смотреть: {}", movie.watch_url);
}

async fn show_history(config: &Config) -> anyhow::Result<()> {
    let store = HistoryStore::open(Path::new(config.database_path())).await?;
    let entries = store
        .recent_queries(&current_user(), DEFAULT_PAGE_LIMIT)
        .await?;

    println!("История поиска:");
    println!();
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, entry.original_title);
        println!("   Запрос: {}", entry.query);
        println!();
    }
    if entries.len() as i64 == DEFAULT_PAGE_LIMIT {
        println!("Показано последние {DEFAULT_PAGE_LIMIT} записей");
    }

    Ok(())
}

async fn show_stats(config: &Config) -> anyhow::Result<()> {
    let store = HistoryStore::open(Path::new(config.database_path())).await?;
    let counts = store.top_titles(&current_user(), DEFAULT_PAGE_LIMIT).await?;

    println!("Статистика показов фильмов:");
    println!();
    for item in counts {
        let shows = item.shows.max(0) as u64;
        println!(
            "{} — {} {}",
            item.original_title,
            shows,
            times_word(shows)
        );
    }

    Ok(())
}

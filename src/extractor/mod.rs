pub mod cleaner;

#[cfg(test)]
mod tests;

pub use cleaner::clean_title;

use crate::model::SourceIdentifier;
use scraper::{Html, Selector};

/// Pull the best-candidate film out of a search-results page.
///
/// Kinopoisk marks its primary hit with the `most_wanted` class; the film id
/// hangs off a `data-id` attribute inside it and the original-title line is
/// the first gray label in the info block. Any missing piece means the page
/// simply had no primary hit, which is an expected outcome, not an error.
pub fn most_wanted(html: &str) -> Option<SourceIdentifier> {
    let document = Html::parse_document(html);

    let element_sel = Selector::parse("div.element.most_wanted").ok()?;
    let info_sel = Selector::parse("div.info").ok()?;
    let label_sel = Selector::parse("span.gray").ok()?;
    let data_id_sel = Selector::parse("[data-id]").ok()?;

    let element = document.select(&element_sel).next()?;
    let info = element.select(&info_sel).next()?;
    let label = info.select(&label_sel).next()?;

    let raw_title = label.text().collect::<String>();
    let display_title = cleaner::clean_title(&raw_title);

    let provider_id = element
        .select(&data_id_sel)
        .next()
        .and_then(|el| el.value().attr("data-id"))?;

    Some(SourceIdentifier {
        provider_id: provider_id.to_string(),
        display_title,
    })
}

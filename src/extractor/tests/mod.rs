use std::fs;

use crate::extractor::most_wanted;

#[test]
fn extracts_primary_hit_from_fixture() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/search_results.html")
        .expect("Failed to read test fixture");

    let ident = most_wanted(&html).expect("fixture has a most_wanted element");
    assert_eq!(ident.provider_id, "12345");
    assert_eq!(ident.display_title, "Inception");
}

#[test]
fn ignores_non_primary_results() {
    // Only a plain element, no most_wanted marker
    let html = r#"
        <div class="element">
            <div class="info"><span class="gray">Beginning, 90 мин</span></div>
        </div>
    "#;
    assert!(most_wanted(html).is_none());
}

#[test]
fn missing_info_block_is_no_match() {
    let html = r#"
        <div class="element most_wanted">
            <p data-id="123">no info block here</p>
        </div>
    "#;
    assert!(most_wanted(html).is_none());
}

#[test]
fn missing_label_span_is_no_match() {
    let html = r#"
        <div class="element most_wanted">
            <div class="info"><p class="name">Начало</p></div>
            <a data-id="123">poster</a>
        </div>
    "#;
    assert!(most_wanted(html).is_none());
}

#[test]
fn missing_data_id_is_no_match() {
    let html = r#"
        <div class="element most_wanted">
            <div class="info"><span class="gray">Inception, 148 мин</span></div>
        </div>
    "#;
    assert!(most_wanted(html).is_none());
}

#[test]
fn title_without_duration_survives_untouched() {
    let html = r#"
        <div class="element most_wanted">
            <a data-id="77">poster</a>
            <div class="info"><span class="gray">Solaris</span></div>
        </div>
    "#;
    let ident = most_wanted(html).unwrap();
    assert_eq!(ident.provider_id, "77");
    assert_eq!(ident.display_title, "Solaris");
}

#[test]
fn empty_page_is_no_match() {
    assert!(most_wanted("<html><body></body></html>").is_none());
}

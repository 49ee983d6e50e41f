//! Russian grammatical-number helpers for count-dependent words.

/// Grammatical number category of a Russian cardinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plural {
    One,
    Few,
    Many,
}

/// Classify `count` per the standard Russian rule: 1, 21, 31, … take the
/// singular (but 11 does not); 2-4, 22-24, … take the paucal (but 12-14 do
/// not); everything else takes the plural.
pub fn plural_ru(count: u64) -> Plural {
    if count % 10 == 1 && count % 100 != 11 {
        Plural::One
    } else if (2..=4).contains(&(count % 10)) && !(12..=14).contains(&(count % 100)) {
        Plural::Few
    } else {
        Plural::Many
    }
}

/// Agreement form of "раз" ("time", as in "3 times") for `count`.
///
/// One and Many happen to coincide for this word; the branches stay separate
/// because other words (and other locales) keep all three forms distinct.
pub fn times_word(count: u64) -> &'static str {
    match plural_ru(count) {
        Plural::One => "раз",
        Plural::Few => "раза",
        Plural::Many => "раз",
    }
}

// crates/gitgeo-core/src/distance.rs
//! Edit-distance fallback for locations no structured rule recognised.

use crate::country::Classification;
use crate::geographies::{FALLBACK_DOMESTIC_ALIASES, FALLBACK_NON_NATIONAL};
use crate::text::title_case;
use crate::traits::GeoLookup;
use tracing::trace;

/// Levenshtein distance over Unicode scalar values (insert, delete and
/// substitute all cost 1).
///
/// Keeps a single previous row, sized by the shorter operand.
///
/// ```rust
/// use gitgeo_core::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("Germny", "Germany"), 1);
/// assert_eq!(levenshtein("", "Peru"), 4);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut short: Vec<char> = a.chars().collect();
    let mut long: Vec<char> = b.chars().collect();
    if short.len() > long.len() {
        std::mem::swap(&mut short, &mut long);
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    for (i2, c2) in long.iter().enumerate() {
        let mut row = Vec::with_capacity(short.len() + 1);
        row.push(i2 + 1);
        for (i1, c1) in short.iter().enumerate() {
            let cell = if c1 == c2 {
                prev[i1]
            } else {
                1 + prev[i1].min(prev[i1 + 1]).min(row[i1])
            };
            row.push(cell);
        }
        prev = row;
    }
    prev[short.len()]
}

/// Last-resort classification: the dataset country closest to `text`.
///
/// `text` is title-cased first. Before any distance is computed the
/// fallback's own alias lists are consulted: a domestic alias anywhere in
/// the text means the United States, an exact supranational name means
/// [`Classification::Unknown`]. Among equally distant countries the
/// lexicographically smallest wins.
pub fn nearest_country(text: &str, tables: &dyn GeoLookup) -> Classification {
    let location = title_case(text);

    if FALLBACK_DOMESTIC_ALIASES
        .iter()
        .any(|alias| location.contains(alias))
    {
        return tables.united_states().into();
    }
    if location.is_empty() || FALLBACK_NON_NATIONAL.contains(&location.as_str()) {
        return Classification::Unknown;
    }

    let mut best: Option<(usize, _)> = None;
    for country in tables.dataset_countries() {
        let dist = levenshtein(&location, country.as_str());
        if best.as_ref().map_or(true, |(min, _)| dist < *min) {
            best = Some((dist, country));
        }
    }

    match best {
        Some((dist, country)) => {
            trace!(location = %location, country = %country, dist, "nearest country");
            country.into()
        }
        None => Classification::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceTables;

    const CITIES: &str = "name,country,subcountry\n\
        Gaza,Palestine,Gaza Strip\n\
        Lima,Peru,Lima region\n\
        Paris,France,Ile-de-France\n\
        Bern,Switzerland,Bern\n\
        Tehran,Iran,Tehran\n\
        Baghdad,Iraq,Baghdad\n";
    const CODES: &str = "country,code\nPalestine,PS\nPeru,PE\nFrance,FR\n";

    fn tables() -> ReferenceTables {
        ReferenceTables::from_readers(CITIES.as_bytes(), CODES.as_bytes()).unwrap()
    }

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("Peru", "Peru"), 0);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("Zürich", "Zurich"), 1);
    }

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [("Palestine", "Pakistan"), ("", "abc"), ("Oslo", "Osaka")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn distance_agrees_with_strsim() {
        let words = ["Germany", "Germny", "Canada", "Kanada", "Saclay", "São Paulo", "Kyiv", ""];
        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a} / {b}");
            }
        }
    }

    #[test]
    fn triangle_inequality_holds() {
        let words = ["Peru", "Perth", "Paris", "Prague", "Praha"];
        for a in words {
            for b in words {
                for c in words {
                    assert!(levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c));
                }
            }
        }
    }

    #[test]
    fn nearest_picks_minimum_distance() {
        let t = tables();
        assert_eq!(nearest_country("palestine", &t), "Palestine");
        assert_eq!(nearest_country("Frence", &t), "France");
    }

    #[test]
    fn ties_resolve_to_lexicographically_first() {
        // "Ira" is one edit from both "Iran" and "Iraq".
        let t = tables();
        assert_eq!(levenshtein("Ira", "Iran"), levenshtein("Ira", "Iraq"));
        assert_eq!(nearest_country("ira", &t), "Iran");
        assert_eq!(nearest_country("Pera", &t), "Peru");
    }

    #[test]
    fn fallback_aliases_short_circuit() {
        let t = tables();
        assert_eq!(nearest_country("bay area", &t), "United States");
        assert_eq!(nearest_country("Europe", &t), Classification::Unknown);
        assert_eq!(nearest_country("earth", &t), Classification::Unknown);
        assert_eq!(nearest_country("", &t), Classification::Unknown);
    }
}

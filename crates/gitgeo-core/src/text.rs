// crates/gitgeo-core/src/text.rs
//! String shaping used by the classifier and the table builder.
//!
//! None of these helpers fold case or strip accents in general: the lookup
//! tables are case-sensitive and the pipeline only repairs a fixed set of
//! observed mis-decodings (see [`CLEANUP_REPLACEMENTS`]).

use crate::geographies::CLEANUP_REPLACEMENTS;

/// Upper-cases the first character and leaves the rest untouched.
///
/// ```rust
/// use gitgeo_core::text::capitalize_first;
///
/// assert_eq!(capitalize_first("berlin, DE"), "Berlin, DE");
/// assert_eq!(capitalize_first("ƒ∞stanbul"), "Ƒ∞stanbul");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Word-wise title casing: a letter following another letter is lowered,
/// any other letter is raised.
///
/// Word boundaries are every non-letter, so `"o'neil"` becomes `"O'Neil"`
/// and `"sri-city"` becomes `"Sri-City"`.
///
/// ```rust
/// use gitgeo_core::text::title_case;
///
/// assert_eq!(title_case("NEW ZEALAND"), "New Zealand");
/// assert_eq!(title_case("menlo park ca"), "Menlo Park Ca");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for ch in s.chars() {
        if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_cased = ch.is_uppercase() || ch.is_lowercase();
    }
    out
}

/// Applies the fixed punctuation and mis-decoding repair table, in order.
///
/// ```rust
/// use gitgeo_core::text::clean_location;
///
/// assert_eq!(clean_location("Montr√©al, QC"), "Montreal, QC");
/// assert_eq!(clean_location("Amsterdam, The Netherlands"), "Amsterdam, Netherlands");
/// assert_eq!(clean_location("Washington D.C."), "Washington DC");
/// ```
pub fn clean_location(s: &str) -> String {
    CLEANUP_REPLACEMENTS
        .iter()
        .fold(s.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Key shape of the combined `city+country` table: commas and spaces
/// removed, case preserved.
pub fn strip_key(s: &str) -> String {
    s.chars().filter(|c| *c != ',' && *c != ' ').collect()
}

/// `true` if `text` ends with `suffix` and the suffix either starts the
/// string or follows a non-alphanumeric character.
pub fn ends_with_word(text: &str, suffix: &str) -> bool {
    match text.strip_suffix(suffix) {
        Some(head) => head
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    }
}

/// Decodes UTF-8, silently dropping every invalid byte sequence.
pub(crate) fn decode_ignoring_errors(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = e.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_only_touches_first_char() {
        assert_eq!(capitalize_first("waterloo"), "Waterloo");
        assert_eq!(capitalize_first("bay AREA"), "Bay AREA");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn title_case_treats_digits_and_punctuation_as_boundaries() {
        assert_eq!(title_case("75015 paris"), "75015 Paris");
        assert_eq!(title_case("sri-city"), "Sri-City");
        assert_eq!(title_case("FRANCE"), "France");
        assert_eq!(title_case("nsw"), "Nsw");
    }

    #[test]
    fn cleanup_repairs_observed_garbling() {
        assert_eq!(clean_location("Z√ºrich"), "Zurich");
        assert_eq!(clean_location("S√£o Paulo"), "Sao Paulo");
        assert_eq!(clean_location("Krak√≥w"), "Krakow");
        assert_eq!(clean_location("Ƒ∞stanbul"), "Istanbul");
        assert_eq!(clean_location("Gda≈Ñsk"), "Gdansk");
        assert_eq!(clean_location("Bras√≠lia, Brazil."), "Brasilia, Brazil");
    }

    #[test]
    fn cleanup_handles_punctuation() {
        assert_eq!(clean_location("Berlin/Florence"), "Berlin Florence");
        assert_eq!(clean_location("Cologne (Germany)"), "Cologne Germany");
        assert_eq!(clean_location("the Hague"), "Hague");
    }

    #[test]
    fn strip_key_keeps_case() {
        assert_eq!(strip_key("Prague, Czech Republic"), "PragueCzechRepublic");
        assert_eq!(strip_key("berlin, de"), "berlinde");
    }

    #[test]
    fn ends_with_word_requires_boundary() {
        assert!(ends_with_word("Naperville, IL", "IL"));
        assert!(ends_with_word("IN", "IN"));
        assert!(!ends_with_word("BERLIN", "IN"));
        assert!(!ends_with_word("Berlin", "IL"));
    }

    #[test]
    fn decoding_drops_invalid_bytes() {
        assert_eq!(decode_ignoring_errors(b"Z\xfcrich"), "Zrich");
        assert_eq!(decode_ignoring_errors("Łódź".as_bytes()), "Łódź");
        assert_eq!(decode_ignoring_errors(b"abc\xe2\x82"), "abc");
        assert_eq!(decode_ignoring_errors(b""), "");
    }
}

// crates/gitgeo-core/src/geographies.rs
//! Hard-coded reference lists.
//!
//! These tables are compiled into the binary. Everything that names a country
//! is checked against the country registry when
//! [`ReferenceTables`](crate::ReferenceTables) is built, so a typo here fails
//! the load instead of silently producing a bogus result.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Result produced by every domestic shortcut.
pub const UNITED_STATES: &str = "United States";

/// Rendering of [`Classification::Unknown`](crate::Classification::Unknown).
pub const UNKNOWN: &str = "None";

/// All countries in the English language, as written by the common
/// locale-data short names.
pub const ALL_COUNTRIES: &[&str] = &[
    "Afghanistan", "Åland Islands", "Albania", "Algeria", "American Samoa", "Andorra",
    "Angola", "Anguilla", "Antarctica", "Antigua & Barbuda", "Argentina", "Armenia", "Aruba",
    "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados",
    "Belarus", "Belgium", "Belize", "Benin", "Bermuda", "Bhutan", "Bolivia",
    "Bosnia & Herzegovina", "Botswana", "Bouvet Island", "Brazil",
    "British Indian Ocean Territory", "British Virgin Islands", "Brunei", "Bulgaria",
    "Burkina Faso", "Burundi", "Cambodia", "Cameroon", "Canada", "Cape Verde",
    "Caribbean Netherlands", "Cayman Islands", "Central African Republic", "Chad", "Chile",
    "China", "Christmas Island", "Cocos (Keeling) Islands", "Colombia", "Comoros",
    "Congo - Brazzaville", "Congo - Kinshasa", "Cook Islands", "Costa Rica", "Côte d’Ivoire",
    "Croatia", "Cuba", "Curaçao", "Cyprus", "Czechia", "Denmark", "Djibouti", "Dominica",
    "Dominican Republic", "Ecuador", "Egypt", "El Salvador", "Equatorial Guinea", "Eritrea",
    "Estonia", "Eswatini", "Ethiopia", "Falkland Islands", "Faroe Islands", "Fiji", "Finland",
    "France", "French Guiana", "French Polynesia", "French Southern Territories", "Gabon",
    "Gambia", "Germany", "Ghana", "Gibraltar", "Greece", "Greenland", "Grenada", "Guadeloupe",
    "Guam", "Guatemala", "Guernsey", "Guinea", "Guinea-Bissau", "Guyana", "Haiti",
    "Heard & McDonald Islands", "Honduras", "Hong Kong SAR China", "Hungary", "Iceland",
    "India", "Indonesia", "Iran", "Iraq", "Ireland", "Isle of Man", "Israel", "Italy",
    "Jamaica", "Japan", "Jersey", "Jordan", "Kazakhstan", "Kenya", "Kiribati", "Kuwait",
    "Kyrgyzstan", "Laos", "Latvia", "Lebanon", "Lesotho", "Liberia", "Libya", "Liechtenstein",
    "Lithuania", "Luxembourg", "Macao SAR China", "Madagascar", "Malawi", "Malaysia",
    "Maldives", "Mali", "Malta", "Marshall Islands", "Martinique", "Mauritania", "Mauritius",
    "Mayotte", "Mexico", "Micronesia", "Moldova", "Monaco", "Mongolia", "Montenegro",
    "Montserrat", "Morocco", "Mozambique", "Myanmar (Burma)", "Namibia", "Nauru", "Nepal",
    "Netherlands", "New Caledonia", "New Zealand", "Nicaragua", "Niger", "Nigeria", "Niue",
    "Norfolk Island", "North Korea", "North Macedonia", "Northern Mariana Islands", "Norway",
    "Oman", "Pakistan", "Palau", "Palestinian Territories", "Panama", "Papua New Guinea",
    "Paraguay", "Peru", "Philippines", "Pitcairn Islands", "Poland", "Portugal", "Puerto Rico",
    "Qatar", "Réunion", "Romania", "Russia", "Rwanda", "Samoa", "San Marino",
    "São Tomé & Príncipe", "Saudi Arabia", "Senegal", "Serbia", "Seychelles", "Sierra Leone",
    "Singapore", "Sint Maarten", "Slovakia", "Slovenia", "Solomon Islands", "Somalia",
    "South Africa", "South Georgia & South Sandwich Islands", "South Korea", "South Sudan",
    "Spain", "Sri Lanka", "St. Barthélemy", "St. Helena", "St. Kitts & Nevis", "St. Lucia",
    "St. Martin", "St. Pierre & Miquelon", "St. Vincent & Grenadines", "Sudan", "Suriname",
    "Svalbard & Jan Mayen", "Sweden", "Switzerland", "Syria", "Taiwan", "Tajikistan",
    "Tanzania", "Thailand", "Timor-Leste", "Togo", "Tokelau", "Tonga", "Trinidad & Tobago",
    "Tunisia", "Turkey", "Turkmenistan", "Turks & Caicos Islands", "Tuvalu",
    "U.S. Outlying Islands", "U.S. Virgin Islands", "Uganda", "Ukraine",
    "United Arab Emirates", "United Kingdom", "United States", "Uruguay", "Uzbekistan",
    "Vanuatu", "Vatican City", "Venezuela", "Vietnam", "Wallis & Futuna", "Western Sahara",
    "Yemen", "Zambia", "Zimbabwe",
];

static ALL_COUNTRY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ALL_COUNTRIES.iter().copied().collect());

/// Exact membership in [`ALL_COUNTRIES`].
pub fn is_listed_country(name: &str) -> bool {
    ALL_COUNTRY_SET.contains(name)
}

/// US states, territories and the federal district (full names).
///
/// Matched against cleaned text, which never contains a period, so no entry
/// here or in [`US_STATE_ABBREVIATIONS`] may contain one. `"Washington D.C."`
/// cleans to `"Washington DC"` and is caught by the `DC` abbreviation.
pub const US_STATE_NAMES: &[&str] = &[
    "Alaska", "Alabama", "Arkansas", "American Samoa", "Arizona", "California", "Colorado",
    "Connecticut", "District of Columbia", "Delaware", "Florida", "Georgia", "Guam", "Hawaii",
    "Iowa", "Idaho", "Illinois", "Indiana", "Kansas", "Kentucky", "Louisiana", "Massachusetts",
    "Maryland", "Maine", "Michigan", "Minnesota", "Missouri", "Mississippi", "Montana",
    "North Carolina", "North Dakota", "Nebraska", "New Hampshire", "New Jersey", "New Mexico",
    "Nevada", "New York", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Puerto Rico",
    "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Virginia",
    "Virgin Islands", "Vermont", "Washington", "Wisconsin", "Washington, DC",
    "West Virginia", "Wyoming",
];

/// USPS abbreviations.
pub const US_STATE_ABBREVIATIONS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "ID", "IL",
    "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV",
    "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX",
    "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Cities whose name is more commonly meant as the major city abroad than as
/// the (usually North American) homonym a plain city lookup would find.
/// Keys are compared verbatim, including a few mis-decoded spellings seen in
/// real profiles.
pub const SPECIAL_CITIES: &[(&str, &str)] = &[
    ("Sydney", "Australia"),
    ("Amsterdam", "Netherlands"),
    ("Barcelona", "Spain"),
    ("Hyderabad", "India"),
    ("Vancouver", "Canada"),
    ("Saint Petersburg", "Russia"),
    ("England", "United Kingdom"),
    ("Athens", "Greece"),
    ("Lima", "Peru"),
    ("Scotland", "United Kingdom"),
    ("Rome", "Italy"),
    ("Dublin", "Ireland"),
    ("Edinburgh", "United Kingdom"),
    ("Bangalore", "India"),
    ("Geneva", "Switzerland"),
    ("Melbourne", "Australia"),
    ("Bruges", "Belgium"),
    ("PRC", "China"),
    ("York", "United Kingdom"),
    ("Valenica", "Spain"),
    ("Republic of Korea", "South Korea"),
    ("Waterloo", "United Kingdom"),
    ("M√ºnchen", "Germany"),
    ("Montreal, CA", "Canada"),
    ("Florian√≥polis", "Brazil"),
    ("Perth", "Australia"),
    ("Oxford", "United Kingdom"),
    ("Milan", "Italy"),
    ("Russian Federation", "Russia"),
];

/// Provinces and states people write instead of a city. Applied after the
/// dataset, overriding any dataset row with the same key.
pub const SUPPLEMENTAL_REGIONS: &[(&str, &str)] = &[
    ("British Columbia", "Canada"),
    ("Ontario", "Canada"),
    ("Quebec", "Canada"),
    ("Manitoba", "Canada"),
    ("Alberta", "Canada"),
    ("New Brunswick", "Canada"),
    ("Nova Scotia", "Canada"),
    ("Nsw", "Australia"),
    ("Qld", "Australia"),
    ("New South Wales", "Australia"),
    ("Queensland", "Australia"),
    ("South Australia", "Australia"),
    ("Tasmania", "Australia"),
    ("Victoria", "Australia"),
    ("Western Australia", "Australia"),
];

/// Exact or substring hit anywhere in the normalized input means the
/// United States.
pub const DOMESTIC_ALIASES: &[&str] = &[
    "US",
    "USA",
    "U.S.A",
    "U.S.",
    "San Francisco",
    "NYC",
    "Bay Area",
    "New York",
    "SF",
    "SF Bay Area",
];

/// The edit-distance fallback runs its own, slightly shorter, domestic list.
pub const FALLBACK_DOMESTIC_ALIASES: &[&str] = &[
    "US",
    "USA",
    "U.S.A",
    "U.S.",
    "San Francisco",
    "NYC",
    "Bay Area",
    "New York",
    "SF",
];

/// Non-geographic or supranational answers. Exact or substring hit yields
/// [`Classification::Unknown`](crate::Classification::Unknown).
pub const NON_GEOGRAPHIC: &[&str] = &[
    "EU",
    "Europe",
    "Earth",
    "Universe",
    "Mars",
    "Milky Way",
    "Knowhere",
    "Internet",
    "Remote",
    "space",
    "127.0.0.1",
    "localhost",
];

/// Exact-match sentinel list consulted by the edit-distance fallback.
pub const FALLBACK_NON_NATIONAL: &[&str] = &["EU", "Europe", "Earth"];

/// Substring overrides for regions that collide with a US state name or are
/// not countries in their own right.
pub const INTERNATIONAL_OVERRIDES: &[(&str, &str)] = &[("Scotland", "United Kingdom")];

/// Single-word city names that are also fragments of larger place names
/// ("San" is a city in Mali, "Bay" in Somalia).
pub const AMBIGUOUS_CITY_TOKENS: &[&str] = &["San", "Bay"];

/// Mis-decoded accented characters observed in profile text and in the
/// world-cities dataset, plus punctuation cleanup. Applied in order.
///
/// This is a fixed table of observed garbling patterns, not a general
/// Unicode normalizer.
pub const CLEANUP_REPLACEMENTS: &[(&str, &str)] = &[
    ("/", " "),
    ("√©", "e"),
    ("√º", "u"),
    ("The ", ""),
    ("the ", ""),
    ("√≠", "i"),
    ("√®", "e"),
    (".", ""),
    ("(", ""),
    (")", ""),
    ("»ô", "s"),
    ("√£", "a"),
    ("√≥", "o"),
    ("Ƒ∞", "I"),
    ("c≈Ç", "c"),
    ("≈Ñ", "n"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_list_has_no_duplicates() {
        assert_eq!(ALL_COUNTRY_SET.len(), ALL_COUNTRIES.len());
    }

    #[test]
    fn listed_country_membership_is_exact() {
        assert!(is_listed_country("Palestinian Territories"));
        assert!(is_listed_country("United States"));
        assert!(!is_listed_country("united states"));
        assert!(!is_listed_country("Palestine"));
    }

    #[test]
    fn state_suffixes_survive_cleanup() {
        assert!(US_STATE_ABBREVIATIONS.contains(&"DC"));
        for suffix in US_STATE_NAMES.iter().chain(US_STATE_ABBREVIATIONS) {
            assert_eq!(crate::text::clean_location(suffix), *suffix, "{suffix:?}");
        }
    }
}

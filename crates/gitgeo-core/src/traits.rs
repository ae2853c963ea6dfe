// crates/gitgeo-core/src/traits.rs
use crate::country::CountryName;

/// An iterator over country names. Boxed so table implementations can hand
/// out whatever iterator their storage produces.
pub type CountriesIter<'a> = Box<dyn Iterator<Item = &'a CountryName> + 'a>;

/// Read-only lookups the classifier runs against.
///
/// [`ReferenceTables`](crate::ReferenceTables) is the production
/// implementation. Every lookup is exact and case-sensitive unless stated
/// otherwise.
pub trait GeoLookup {
    /// City name to country. Duplicate city names resolve to the first
    /// occurrence in the dataset.
    fn city_to_country(&self, city: &str) -> Option<&CountryName>;

    /// Metro area (dataset `subcountry`) to country.
    fn metro_to_country(&self, metro: &str) -> Option<&CountryName>;

    /// First metro area, in dataset order, whose name contains `fragment`.
    fn metro_containing(&self, fragment: &str) -> Option<&CountryName>;

    fn code_to_country(&self, code: &str) -> Option<&CountryName>;

    /// First code listed for `country` in the code file.
    fn country_to_code(&self, country: &str) -> Option<&str>;

    /// Hand-curated overrides for ambiguous city names.
    fn special_city(&self, name: &str) -> Option<&CountryName>;

    /// First override whose key occurs anywhere in `text`.
    fn international_override(&self, text: &str) -> Option<&CountryName>;

    /// Lookup on the stripped `city+country` / `city+code` key.
    fn combined_city_country_key(&self, key: &str) -> Option<&CountryName>;

    /// `name` if it is on the canonical country list.
    fn listed_country(&self, name: &str) -> Option<&CountryName>;

    fn united_states(&self) -> &CountryName;

    /// Distinct countries that own at least one city row, in lexicographic
    /// order.
    fn dataset_countries(&self) -> CountriesIter<'_>;
}

// crates/gitgeo-core/src/model/search.rs
use super::ReferenceTables;
use crate::country::CountryName;
use crate::geographies::is_listed_country;
use crate::traits::{CountriesIter, GeoLookup};

impl GeoLookup for ReferenceTables {
    fn city_to_country(&self, city: &str) -> Option<&CountryName> {
        self.cities.get(city)
    }

    fn metro_to_country(&self, metro: &str) -> Option<&CountryName> {
        self.metros
            .get(metro)
            .map(|&idx| &self.metro_order[idx].1)
    }

    fn metro_containing(&self, fragment: &str) -> Option<&CountryName> {
        // Linear scan in dataset order; ties resolve to the earliest row.
        self.metro_order
            .iter()
            .find(|(metro, _)| metro.contains(fragment))
            .map(|(_, country)| country)
    }

    fn code_to_country(&self, code: &str) -> Option<&CountryName> {
        self.codes.get(code)
    }

    fn country_to_code(&self, country: &str) -> Option<&str> {
        self.country_codes
            .get(country)
            .and_then(|codes| codes.first())
            .map(String::as_str)
    }

    fn special_city(&self, name: &str) -> Option<&CountryName> {
        self.special_cities.get(name)
    }

    fn international_override(&self, text: &str) -> Option<&CountryName> {
        self.international
            .iter()
            .find(|(key, _)| text.contains(key))
            .map(|(_, country)| country)
    }

    fn combined_city_country_key(&self, key: &str) -> Option<&CountryName> {
        self.combined.get(key)
    }

    fn listed_country(&self, name: &str) -> Option<&CountryName> {
        if is_listed_country(name) {
            self.registry.resolve(name)
        } else {
            None
        }
    }

    fn united_states(&self) -> &CountryName {
        &self.united_states
    }

    fn dataset_countries(&self) -> CountriesIter<'_> {
        Box::new(self.dataset_countries.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::convert::from_raw;
    use crate::raw::{CityRaw, CountryCodeRaw};
    use crate::traits::GeoLookup;

    fn tables() -> crate::ReferenceTables {
        let rows = [
            ("Toronto", "Canada", "Ontario"),
            ("Kitchener", "Canada", "Ontario"),
            ("Newcastle", "Australia", "New South Wales"),
            ("Wellington", "New Zealand", "Wellington"),
            ("Newcastle upon Tyne", "United Kingdom", "England"),
        ];
        let cities = rows
            .iter()
            .map(|(city, country, metro)| CityRaw {
                city: (*city).into(),
                country: (*country).into(),
                metro: (*metro).into(),
            })
            .collect();
        let codes = vec![
            CountryCodeRaw { country: "Canada".into(), code: "CA".into() },
            CountryCodeRaw { country: "United Kingdom".into(), code: "GB".into() },
            CountryCodeRaw { country: "United Kingdom".into(), code: "UK".into() },
        ];
        from_raw(cities, codes, 0).unwrap()
    }

    #[test]
    fn metro_substring_scan_follows_dataset_order() {
        let t = tables();
        assert_eq!(t.metro_containing("South").unwrap(), "Australia");
        assert_eq!(t.metro_containing("n").unwrap(), "Canada");
        assert!(t.metro_containing("ontario").is_none());
    }

    #[test]
    fn country_to_code_returns_first_listed() {
        let t = tables();
        assert_eq!(t.country_to_code("United Kingdom"), Some("GB"));
        assert_eq!(t.code_to_country("UK").unwrap(), "United Kingdom");
        assert_eq!(t.country_to_code("Atlantis"), None);
    }

    #[test]
    fn listed_country_ignores_code_file_spellings() {
        let t = tables();
        assert!(t.listed_country("Canada").is_some());
        assert!(t.listed_country("canada").is_none());
    }

    #[test]
    fn dataset_countries_are_sorted_and_distinct() {
        let t = tables();
        let names: Vec<&str> = t.dataset_countries().map(|c| c.as_str()).collect();
        assert_eq!(names, ["Australia", "Canada", "New Zealand", "United Kingdom"]);
    }

    #[test]
    fn international_override_is_a_substring_match() {
        let t = tables();
        assert_eq!(t.international_override("Glasgow, Scotland").unwrap(), "United Kingdom");
        assert!(t.international_override("Scot").is_none());
    }
}

// crates/gitgeo-core/src/summary.rs
use serde::Serialize;
use std::collections::HashMap;

use crate::country::Classification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: Classification,
    pub count: usize,
}

/// Per-country tally of a batch of classifications, most common first.
///
/// Unknown results are counted under `"None"` like any other answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountrySummary {
    entries: Vec<CountryCount>,
}

impl CountrySummary {
    /// Ties keep the order in which each country was first seen.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Classification>,
    {
        let mut slots: HashMap<Classification, usize> = HashMap::new();
        let mut entries: Vec<CountryCount> = Vec::new();
        for result in results {
            match slots.get(&result) {
                Some(&i) => entries[i].count += 1,
                None => {
                    slots.insert(result.clone(), entries.len());
                    entries.push(CountryCount { country: result, count: 1 });
                }
            }
        }
        // stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn entries(&self) -> &[CountryCount] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, country: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.country.as_str() == country)
            .map_or(0, |e| e.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryRegistry;

    fn c(registry: &mut CountryRegistry, name: &str) -> Classification {
        registry.register(name).into()
    }

    #[test]
    fn most_common_first_ties_in_first_seen_order() {
        let mut reg = CountryRegistry::with_listed();
        let results = vec![
            c(&mut reg, "Germany"),
            Classification::Unknown,
            c(&mut reg, "Canada"),
            c(&mut reg, "Canada"),
            c(&mut reg, "Germany"),
            c(&mut reg, "Japan"),
            c(&mut reg, "Canada"),
        ];
        let summary = CountrySummary::from_results(results);
        let order: Vec<_> = summary
            .entries()
            .iter()
            .map(|e| (e.country.as_str(), e.count))
            .collect();
        assert_eq!(order, vec![("Canada", 3), ("Germany", 2), ("None", 1), ("Japan", 1)]);
        assert_eq!(summary.total(), 7);
        assert_eq!(summary.count_of("Japan"), 1);
        assert_eq!(summary.count_of("Peru"), 0);
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let summary = CountrySummary::from_results(Vec::<Classification>::new());
        assert!(summary.is_empty());
        assert_eq!(serde_json::to_string(&summary).unwrap(), "[]");
    }

    #[test]
    fn serializes_as_country_count_pairs() {
        let mut reg = CountryRegistry::with_listed();
        let summary = CountrySummary::from_results([c(&mut reg, "Peru")]);
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"[{"country":"Peru","count":1}]"#
        );
    }
}

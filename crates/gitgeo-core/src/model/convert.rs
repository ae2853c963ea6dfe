// crates/gitgeo-core/src/model/convert.rs
use super::ReferenceTables;
use crate::country::{CountryName, CountryRegistry};
use crate::error::{GeoError, Result};
use crate::geographies::{
    INTERNATIONAL_OVERRIDES, SPECIAL_CITIES, SUPPLEMENTAL_REGIONS, UNITED_STATES,
};
use crate::raw::{CityRaw, CountryCodeRaw};
use crate::text::strip_key;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// **Standard Converter:** raw rows -> [`ReferenceTables`].
///
/// Precedence rules:
/// - a city or metro name that recurs keeps its FIRST row;
/// - combined keys likewise keep the first row that produced them;
/// - [`SUPPLEMENTAL_REGIONS`] are written last and override the dataset.
///
/// `skipped_rows` carries the count of rows the reader already rejected, so
/// it shows up in [`TableStats`](crate::TableStats).
pub fn from_raw(
    cities: Vec<CityRaw>,
    codes: Vec<CountryCodeRaw>,
    skipped_rows: usize,
) -> Result<ReferenceTables> {
    let mut registry = CountryRegistry::with_listed();
    let mut skipped_rows = skipped_rows;

    // 1. Country codes (both directions). Every name here joins the registry.
    let mut code_map: HashMap<String, CountryName> = HashMap::new();
    let mut country_codes: HashMap<CountryName, Vec<String>> = HashMap::new();
    for row in codes {
        let country = registry.register(&row.country);
        code_map
            .entry(row.code.clone())
            .or_insert_with(|| country.clone());
        let listed = country_codes.entry(country).or_default();
        if !listed.contains(&row.code) {
            listed.push(row.code);
        }
    }
    debug!(codes = code_map.len(), "country code table built");

    // 2. World cities: city, metro and combined tables.
    let mut city_map: HashMap<String, CountryName> = HashMap::new();
    let mut metros: HashMap<String, usize> = HashMap::new();
    let mut metro_order: Vec<(String, CountryName)> = Vec::new();
    let mut combined: HashMap<String, CountryName> = HashMap::new();
    let mut dataset_countries: BTreeSet<CountryName> = BTreeSet::new();

    for row in cities {
        let Some(country) = registry.resolve(&row.country).cloned() else {
            warn!(city = %row.city, country = %row.country, "skipping city row with unknown country");
            skipped_rows += 1;
            continue;
        };

        city_map
            .entry(row.city.clone())
            .or_insert_with(|| country.clone());

        if !row.metro.is_empty() && !metros.contains_key(&row.metro) {
            metros.insert(row.metro.clone(), metro_order.len());
            metro_order.push((row.metro.clone(), country.clone()));
        }

        combined
            .entry(strip_key(&format!("{}{}", row.city, country)))
            .or_insert_with(|| country.clone());
        for code in country_codes.get(&country).into_iter().flatten() {
            combined
                .entry(strip_key(&format!("{}{}", row.city, code)))
                .or_insert_with(|| country.clone());
        }

        dataset_countries.insert(country);
    }

    if city_map.is_empty() {
        return Err(GeoError::InvalidData(
            "world-cities dataset yielded no usable rows".into(),
        ));
    }
    debug!(
        cities = city_map.len(),
        metros = metro_order.len(),
        combined = combined.len(),
        skipped = skipped_rows,
        "city tables built"
    );

    // 3. Hard-coded tables, validated against the registry.
    for (region, country) in SUPPLEMENTAL_REGIONS {
        let country = registry.require(country, "supplemental regions")?;
        city_map.insert((*region).to_owned(), country);
    }

    let special_cities = SPECIAL_CITIES
        .iter()
        .map(|(city, country)| Ok((*city, registry.require(country, "special cities")?)))
        .collect::<Result<HashMap<_, _>>>()?;

    let international = INTERNATIONAL_OVERRIDES
        .iter()
        .map(|(key, country)| Ok((*key, registry.require(country, "international overrides")?)))
        .collect::<Result<Vec<_>>>()?;

    let united_states = registry.require(UNITED_STATES, "domestic aliases")?;

    Ok(ReferenceTables {
        registry,
        cities: city_map,
        metros,
        metro_order,
        codes: code_map,
        country_codes,
        special_cities,
        international,
        combined,
        dataset_countries,
        united_states,
        skipped_rows,
    })
}

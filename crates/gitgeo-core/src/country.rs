// crates/gitgeo-core/src/country.rs
use crate::error::{GeoError, Result};
use crate::geographies::{ALL_COUNTRIES, UNKNOWN};
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A country name that is known to the [`CountryRegistry`].
///
/// Values can only be obtained from a registry, so every country coming out
/// of the classifier was validated when the reference tables were built.
/// Cloning is a reference-count bump.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryName(Arc<str>);

impl CountryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CountryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CountryName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for CountryName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Serialize for CountryName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The closed set of country names the tables may refer to.
///
/// Seeded with [`ALL_COUNTRIES`] and extended with every name found in the
/// country-code file, which is where dataset spellings such as
/// `"Czech Republic"` or `"Palestine"` become legal.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    names: HashSet<CountryName>,
}

impl CountryRegistry {
    /// Registry holding exactly the hard-coded country list.
    pub fn with_listed() -> Self {
        let mut registry = Self::default();
        for name in ALL_COUNTRIES {
            registry.register(name);
        }
        registry
    }

    /// Adds `name` (if new) and returns the interned value.
    pub(crate) fn register(&mut self, name: &str) -> CountryName {
        if let Some(existing) = self.names.get(name) {
            return existing.clone();
        }
        let interned = CountryName(Arc::from(name));
        self.names.insert(interned.clone());
        interned
    }

    pub fn resolve(&self, name: &str) -> Option<&CountryName> {
        self.names.get(name)
    }

    /// Like [`resolve`](Self::resolve) but a miss is a data error naming
    /// the table that referenced the unknown country.
    pub fn require(&self, name: &str, table: &str) -> Result<CountryName> {
        self.resolve(name).cloned().ok_or_else(|| {
            GeoError::InvalidData(format!("{table} references unknown country {name:?}"))
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Outcome of classifying one location string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Country(CountryName),
    /// No usable location. Rendered as `"None"`.
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &str {
        match self {
            Classification::Country(name) => name.as_str(),
            Classification::Unknown => UNKNOWN,
        }
    }

    pub fn country(&self) -> Option<&CountryName> {
        match self {
            Classification::Country(name) => Some(name),
            Classification::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Classification::Unknown)
    }
}

impl From<CountryName> for Classification {
    fn from(name: CountryName) -> Self {
        Classification::Country(name)
    }
}

impl From<&CountryName> for Classification {
    fn from(name: &CountryName) -> Self {
        Classification::Country(name.clone())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Classification {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_interns_names() {
        let mut registry = CountryRegistry::with_listed();
        let before = registry.len();
        let a = registry.register("Palestine");
        let b = registry.register("Palestine");
        assert_eq!(a, b);
        assert_eq!(registry.len(), before + 1);
        assert!(registry.contains("Japan"));
    }

    #[test]
    fn require_reports_the_table() {
        let registry = CountryRegistry::with_listed();
        let err = registry.require("Atlantis", "special cities").unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(ref msg) if msg.contains("special cities")));
    }

    #[test]
    fn unknown_renders_as_none() {
        assert_eq!(Classification::Unknown.to_string(), "None");
        assert_eq!(Classification::Unknown, "None");
    }

    #[test]
    fn serializes_as_plain_string() {
        let mut registry = CountryRegistry::default();
        let japan = Classification::from(registry.register("Japan"));
        assert_eq!(serde_json::to_string(&japan).unwrap(), "\"Japan\"");
        assert_eq!(
            serde_json::to_string(&Classification::Unknown).unwrap(),
            "\"None\""
        );
    }
}

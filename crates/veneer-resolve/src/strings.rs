//! Localized UI string catalog.
//!
//! The theme ships translated interface variables keyed by language. Lookup
//! walks the session's locale chain: region-qualified table first, then the
//! bare language, then the base (untranslated) table. A missing key is
//! `None`, never an error.

use std::collections::BTreeMap;

use serde::Deserialize;

use veneer_types::error::Result;

use crate::locale::LocaleChain;

/// Base strings plus per-locale override tables.
///
/// Translation tables are keyed by the lowercase locale tag (`"es"`,
/// `"es-mx"`). Example document:
///
/// ```toml
/// [base]
/// all-games = "All Games"
///
/// [translations.es]
/// all-games = "Todos los juegos"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StringCatalog {
    base: BTreeMap<String, String>,
    translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl StringCatalog {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Look up `key`, walking `chain` from most to least specific and ending
    /// at the base table.
    pub fn lookup(&self, key: &str, chain: &LocaleChain) -> Option<&str> {
        for tag in chain.tags() {
            let table_key = tag.to_string().to_ascii_lowercase();
            if let Some(value) = self.translations.get(&table_key).and_then(|t| t.get(key)) {
                return Some(value);
            }
        }
        self.base.get(key).map(String::as_str)
    }

    /// Number of keys in the base table.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Languages this catalog carries overrides for.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

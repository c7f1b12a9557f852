//! Metadata merge resolution.
//!
//! A displayed field (system name, manufacturer, release year, ...) can have
//! two authors: the theme bundle and the host launcher's database. The merge
//! is a pure per-field selection driven by the metadata-source setting; there
//! is no partial merging within a single value.

use std::collections::BTreeMap;

use serde::Deserialize;

use veneer_types::error::Result;
use veneer_types::settings::MetadataSource;

/// Pick the value for one field.
///
/// Source `Theme`: theme value if present, else host value, else absent.
/// Source `Host`: the reverse.
pub fn merge_field<'a>(
    theme: Option<&'a str>,
    host: Option<&'a str>,
    source: MetadataSource,
) -> Option<&'a str> {
    match source {
        MetadataSource::Theme => theme.or(host),
        MetadataSource::Host => host.or(theme),
    }
}

/// A named field with both candidate values attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataField {
    pub key: String,
    pub theme_value: Option<String>,
    pub host_value: Option<String>,
}

impl MetadataField {
    pub fn new(
        key: impl Into<String>,
        theme_value: Option<String>,
        host_value: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            theme_value,
            host_value,
        }
    }

    pub fn resolve(&self, source: MetadataSource) -> Option<&str> {
        merge_field(self.theme_value.as_deref(), self.host_value.as_deref(), source)
    }
}

/// Theme-authored metadata for one entity.
///
/// Mirrors the per-system variables the theme bundle ships (name,
/// description, manufacturer, release year, hardware type, cover and
/// cartridge art sizing). All fields optional; TOML-deserializable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntityMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub release_year: Option<String>,
    pub hardware_type: Option<String>,
    pub cover_size: Option<String>,
    pub cart_size: Option<String>,
}

impl EntityMetadata {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// (key, value) view over the populated fields.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("manufacturer", &self.manufacturer),
            ("release_year", &self.release_year),
            ("hardware_type", &self.hardware_type),
            ("cover_size", &self.cover_size),
            ("cart_size", &self.cart_size),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }

    /// Merge against host-authored values, field by field.
    ///
    /// Keys present on either side appear in the result when the selection
    /// yields a value; keys absent on both sides stay absent.
    pub fn merged(
        &self,
        host: &BTreeMap<String, String>,
        source: MetadataSource,
    ) -> BTreeMap<String, String> {
        let theme: BTreeMap<&str, &str> = self.fields().collect();
        let mut keys: Vec<&str> = theme.keys().copied().collect();
        for key in host.keys() {
            if !theme.contains_key(key.as_str()) {
                keys.push(key.as_str());
            }
        }

        let mut out = BTreeMap::new();
        for key in keys {
            let picked = merge_field(
                theme.get(key).copied(),
                host.get(key).map(String::as_str),
                source,
            );
            if let Some(value) = picked {
                out.insert(key.to_string(), value.to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_source_prefers_theme_value() {
        assert_eq!(
            merge_field(Some("Value A"), Some("Value B"), MetadataSource::Theme),
            Some("Value A")
        );
    }

    #[test]
    fn theme_source_falls_back_to_host() {
        assert_eq!(
            merge_field(None, Some("Value B"), MetadataSource::Theme),
            Some("Value B")
        );
    }

    #[test]
    fn host_source_prefers_host_value() {
        assert_eq!(
            merge_field(Some("Value A"), Some("Value B"), MetadataSource::Host),
            Some("Value B")
        );
        assert_eq!(
            merge_field(Some("Value A"), None, MetadataSource::Host),
            Some("Value A")
        );
    }

    #[test]
    fn both_absent_stays_absent() {
        assert_eq!(merge_field(None, None, MetadataSource::Theme), None);
        assert_eq!(merge_field(None, None, MetadataSource::Host), None);
    }

    #[test]
    fn field_resolve_matches_free_function() {
        let field = MetadataField::new("name", Some("SNES".into()), Some("Super NES".into()));
        assert_eq!(field.resolve(MetadataSource::Theme), Some("SNES"));
        assert_eq!(field.resolve(MetadataSource::Host), Some("Super NES"));
    }

    #[test]
    fn entity_metadata_from_toml() {
        let meta = EntityMetadata::from_toml(
            r#"
name = "Super Nintendo"
manufacturer = "Nintendo"
release_year = "1990"
"#,
        )
        .unwrap();
        assert_eq!(meta.name.as_deref(), Some("Super Nintendo"));
        assert_eq!(meta.description, None);
        let keys: Vec<&str> = meta.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "manufacturer", "release_year"]);
    }

    #[test]
    fn merged_map_is_per_field() {
        let theme = EntityMetadata {
            name: Some("SNES".into()),
            manufacturer: Some("Nintendo".into()),
            ..Default::default()
        };
        let mut host = BTreeMap::new();
        host.insert("name".to_string(), "Super NES".to_string());
        host.insert("release_year".to_string(), "1990".to_string());

        let merged = theme.merged(&host, MetadataSource::Theme);
        assert_eq!(merged["name"], "SNES");
        assert_eq!(merged["manufacturer"], "Nintendo");
        assert_eq!(merged["release_year"], "1990");

        let merged = theme.merged(&host, MetadataSource::Host);
        assert_eq!(merged["name"], "Super NES");
        assert_eq!(merged["manufacturer"], "Nintendo");
    }

    #[test]
    fn invalid_metadata_toml_is_an_error() {
        assert!(EntityMetadata::from_toml("name = [not toml").is_err());
    }
}

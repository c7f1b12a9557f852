//! Locale normalization and fallback chains.
//!
//! A raw locale string from user or system settings is normalized once per
//! session into a chain of decreasing specificity: `es-MX` becomes
//! `[es-MX, es]` followed by the implicit locale-agnostic terminal step.
//! Malformed input collapses to the terminal step alone; there is no failure
//! mode.

use std::fmt;

/// A normalized locale: lowercase language, optional uppercase region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
}

impl LocaleTag {
    /// Parse and normalize a raw tag. Accepts `-` or `_` separators.
    ///
    /// Languages are 2-3 ASCII letters; regions are 2 letters or 3 digits
    /// (UN M.49 areas). Anything else, including script-qualified tags,
    /// yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().split(['-', '_']);
        let language = parts.next()?;
        let region = parts.next();
        if parts.next().is_some() {
            return None;
        }

        let lang_ok = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_alphabetic());
        if !lang_ok {
            return None;
        }

        let region = match region {
            None => None,
            Some(r) => {
                let alpha2 = r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic());
                let digit3 = r.len() == 3 && r.chars().all(|c| c.is_ascii_digit());
                if !alpha2 && !digit3 {
                    return None;
                }
                Some(r.to_ascii_uppercase())
            },
        };

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The tag without its region, or `None` when there is no region to drop.
    pub fn without_region(&self) -> Option<Self> {
        self.region.as_ref().map(|_| Self {
            language: self.language.clone(),
            region: None,
        })
    }

    /// File-name suffix for this tag, e.g. `-es-MX`.
    pub fn suffix(&self) -> String {
        format!("-{self}")
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

/// Ordered locale fallback chain, most to least specific.
///
/// The chain always terminates in the locale-agnostic step, so a caller
/// walking it can always fall back to the unsuffixed asset. That terminal
/// step is implicit in `tags()` and explicit in `suffixes()` (the empty
/// suffix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChain {
    tags: Vec<LocaleTag>,
}

impl LocaleChain {
    /// Build the chain for a raw locale setting.
    ///
    /// Absent or malformed input produces the agnostic chain; that is the
    /// normal terminal state, not an error.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.and_then(LocaleTag::parse) {
            Some(tag) => Self::from_tag(tag),
            None => Self::agnostic(),
        }
    }

    /// Chain containing only the locale-agnostic terminal step.
    pub fn agnostic() -> Self {
        Self { tags: Vec::new() }
    }

    /// Expand a single normalized tag into its fallback chain.
    pub fn from_tag(tag: LocaleTag) -> Self {
        let mut tags = vec![tag];
        if let Some(bare) = tags[0].without_region() {
            tags.push(bare);
        }
        Self { tags }
    }

    /// Locale-qualified steps, most specific first. Does not include the
    /// terminal agnostic step.
    pub fn tags(&self) -> &[LocaleTag] {
        &self.tags
    }

    /// File-name suffixes to try in order, ending with the empty suffix.
    pub fn suffixes(&self) -> impl Iterator<Item = String> + '_ {
        self.tags
            .iter()
            .map(LocaleTag::suffix)
            .chain(std::iter::once(String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_qualified_tag_normalizes() {
        let tag = LocaleTag::parse("ES_mx").unwrap();
        assert_eq!(tag.language(), "es");
        assert_eq!(tag.region(), Some("MX"));
        assert_eq!(tag.to_string(), "es-MX");
        assert_eq!(tag.suffix(), "-es-MX");
    }

    #[test]
    fn bare_language_tag() {
        let tag = LocaleTag::parse("pt").unwrap();
        assert_eq!(tag.region(), None);
        assert_eq!(tag.suffix(), "-pt");
    }

    #[test]
    fn numeric_region_is_accepted() {
        let tag = LocaleTag::parse("es-419").unwrap();
        assert_eq!(tag.region(), Some("419"));
    }

    #[test]
    fn malformed_tags_are_rejected() {
        for raw in ["", "e", "engl", "es-Latn-MX", "es-M", "es-MEX", "12-MX"] {
            assert!(LocaleTag::parse(raw).is_none(), "should reject {raw:?}");
        }
    }

    #[test]
    fn chain_for_region_qualified_locale() {
        let chain = LocaleChain::parse(Some("es-MX"));
        let suffixes: Vec<String> = chain.suffixes().collect();
        assert_eq!(suffixes, ["-es-MX", "-es", ""]);
    }

    #[test]
    fn chain_for_bare_language() {
        let chain = LocaleChain::parse(Some("de"));
        let suffixes: Vec<String> = chain.suffixes().collect();
        assert_eq!(suffixes, ["-de", ""]);
    }

    #[test]
    fn absent_or_malformed_locale_is_agnostic() {
        for raw in [None, Some("not a locale"), Some("")] {
            let chain = LocaleChain::parse(raw);
            assert!(chain.tags().is_empty());
            let suffixes: Vec<String> = chain.suffixes().collect();
            assert_eq!(suffixes, [""], "raw={raw:?}");
        }
    }

    #[test]
    fn chain_always_terminates_in_agnostic_step() {
        for raw in [Some("es-MX"), Some("ja"), Some("garbage"), None] {
            let chain = LocaleChain::parse(raw);
            assert_eq!(chain.suffixes().last().unwrap(), "");
        }
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(raw in ".{0,20}") {
                let _ = LocaleTag::parse(&raw);
                let _ = LocaleChain::parse(Some(&raw));
            }

            #[test]
            fn normalization_is_idempotent(
                lang in "[a-zA-Z]{2,3}",
                region in "[a-zA-Z]{2}",
            ) {
                let raw = format!("{lang}-{region}");
                let tag = LocaleTag::parse(&raw).unwrap();
                let reparsed = LocaleTag::parse(&tag.to_string()).unwrap();
                prop_assert_eq!(tag, reparsed);
            }

            #[test]
            fn chain_specificity_decreases(lang in "[a-z]{2}", region in "[A-Z]{2}") {
                let chain = LocaleChain::parse(Some(&format!("{lang}-{region}")));
                let suffixes: Vec<String> = chain.suffixes().collect();
                prop_assert_eq!(suffixes.len(), 3);
                for pair in suffixes.windows(2) {
                    prop_assert!(pair[0].len() > pair[1].len());
                }
            }
        }
    }
}

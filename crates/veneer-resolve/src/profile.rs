//! Display profile resolution.
//!
//! Merges the raw, independently-optional option values from the settings
//! provider into one immutable snapshot for a rendering session. Every
//! option either takes the user's in-domain value or its documented default;
//! out-of-domain values are rejected locally (logged and reported, never
//! propagated as a failure). Consumers only ever see a fully-populated
//! profile -- there is no partial state.

use veneer_types::settings::{
    AspectRatio, ColorScheme, Distribution, MediaType, MetadataSource, RawSettings, parse_toggle,
};

/// Immutable per-session snapshot of all display options.
///
/// Replaced wholesale on every settings change; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayProfile {
    pub aspect_ratio: AspectRatio,
    pub color_scheme: ColorScheme,
    pub media_type: MediaType,
    pub video_previews: bool,
    pub grid_titles: bool,
    pub metadata_source: MetadataSource,
    pub smooth_resize: bool,
    pub distribution: Distribution,
}

impl Default for DisplayProfile {
    /// Documented defaults for every option.
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::Automatic,
            color_scheme: ColorScheme::Light,
            media_type: MediaType::Boxart,
            video_previews: false,
            grid_titles: false,
            metadata_source: MetadataSource::Theme,
            smooth_resize: true,
            distribution: Distribution::None,
        }
    }
}

/// Diagnostic record of an out-of-domain raw value that was replaced by the
/// option's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    /// Settings key the value arrived under.
    pub key: &'static str,
    /// The raw value that failed validation.
    pub value: String,
}

impl DisplayProfile {
    /// Resolve raw option values into a profile.
    ///
    /// Returns the snapshot plus the list of rejected values (empty when all
    /// supplied values were in-domain). Rejections are also logged.
    pub fn from_raw(raw: &RawSettings) -> (Self, Vec<RejectedSetting>) {
        let mut rejected = Vec::new();
        let defaults = Self::default();

        let profile = Self {
            aspect_ratio: pick(
                "aspect_ratio",
                raw.aspect_ratio.as_deref(),
                AspectRatio::from_setting,
                defaults.aspect_ratio,
                &mut rejected,
            ),
            color_scheme: pick(
                "color_scheme",
                raw.color_scheme.as_deref(),
                ColorScheme::from_setting,
                defaults.color_scheme,
                &mut rejected,
            ),
            media_type: pick(
                "media_type",
                raw.media_type.as_deref(),
                MediaType::from_setting,
                defaults.media_type,
                &mut rejected,
            ),
            video_previews: pick(
                "video_previews",
                raw.video_previews.as_deref(),
                parse_toggle,
                defaults.video_previews,
                &mut rejected,
            ),
            grid_titles: pick(
                "grid_titles",
                raw.grid_titles.as_deref(),
                parse_toggle,
                defaults.grid_titles,
                &mut rejected,
            ),
            metadata_source: pick(
                "metadata_source",
                raw.metadata_source.as_deref(),
                MetadataSource::from_setting,
                defaults.metadata_source,
                &mut rejected,
            ),
            smooth_resize: pick(
                "smooth_resize",
                raw.smooth_resize.as_deref(),
                parse_toggle,
                defaults.smooth_resize,
                &mut rejected,
            ),
            distribution: pick(
                "distribution",
                raw.distribution.as_deref(),
                Distribution::from_setting,
                defaults.distribution,
                &mut rejected,
            ),
        };

        (profile, rejected)
    }
}

/// Validate one option: user value when in-domain, default otherwise.
fn pick<T>(
    key: &'static str,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
    rejected: &mut Vec<RejectedSetting>,
) -> T {
    match raw {
        None => default,
        Some(value) => match parse(value) {
            Some(parsed) => parsed,
            None => {
                log::warn!("setting '{key}': value {value:?} not in domain; using default");
                rejected.push(RejectedSetting {
                    key,
                    value: value.to_string(),
                });
                default
            },
        },
    }
}

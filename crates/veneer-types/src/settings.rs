//! User-facing display settings.
//!
//! The settings provider hands the engine raw string values (whatever the
//! launcher's menu stored). Each option has an enumerated domain and a fixed
//! default; validation and default substitution happen in the display profile
//! resolver, which keeps these types pure data.

use serde::Deserialize;

/// Raw option values as supplied by the settings collaborator.
///
/// Every field is independently optional; `None` means "user never touched
/// this option". Deserializable so a settings TOML document can feed the
/// engine directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    pub aspect_ratio: Option<String>,
    pub color_scheme: Option<String>,
    pub media_type: Option<String>,
    pub video_previews: Option<String>,
    pub grid_titles: Option<String>,
    pub metadata_source: Option<String>,
    pub smooth_resize: Option<String>,
    pub distribution: Option<String>,
}

/// Screen aspect ratio the layout is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    #[default]
    Automatic,
    SixteenNine,
    SixteenTen,
    FourThree,
    TwentyOneNine,
}

impl AspectRatio {
    pub fn from_setting(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "automatic" | "auto" => Some(Self::Automatic),
            "16:9" => Some(Self::SixteenNine),
            "16:10" => Some(Self::SixteenTen),
            "4:3" => Some(Self::FourThree),
            "21:9" => Some(Self::TwentyOneNine),
            _ => None,
        }
    }
}

/// Light or dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_setting(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Which scraped media image is shown per game in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    Boxart,
    Miximage,
    Screenshot,
    Titlescreen,
    Fanart,
}

impl MediaType {
    pub fn from_setting(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "boxart" => Some(Self::Boxart),
            "miximage" => Some(Self::Miximage),
            "screenshot" => Some(Self::Screenshot),
            "titlescreen" => Some(Self::Titlescreen),
            "fanart" => Some(Self::Fanart),
            _ => None,
        }
    }
}

/// Which side wins when a metadata field has both a theme-authored and a
/// host-authored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetadataSource {
    /// Theme-shipped metadata wins; host values fill the gaps.
    #[default]
    Theme,
    /// Host (launcher database) metadata wins; theme values fill the gaps.
    Host,
}

impl MetadataSource {
    pub fn from_setting(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "theme" => Some(Self::Theme),
            "host" => Some(Self::Host),
            _ => None,
        }
    }
}

/// Host environment the theme is installed on.
///
/// Each distribution stores user theme customizations under a different
/// absolute path convention; `None` means no customization layer exists and
/// only the builtin asset set is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    #[default]
    None,
    Knulli,
    Batocera,
    Muos,
}

impl Distribution {
    pub fn from_setting(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "knulli" => Some(Self::Knulli),
            "batocera" => Some(Self::Batocera),
            "muos" => Some(Self::Muos),
            _ => None,
        }
    }

    /// Fixed table mapping each distribution to its customization root path.
    pub fn customization_root(self) -> Option<&'static str> {
        match self {
            Distribution::None => None,
            Distribution::Knulli => Some("/userdata/theme-customizations/veneer"),
            Distribution::Batocera => Some("/userdata/themes/veneer-customizations"),
            Distribution::Muos => Some("/run/muos/storage/theme/customizations/veneer"),
        }
    }
}

/// Parse a yes/no toggle. Accepts the spellings launcher menus actually emit.
pub fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" => Some(true),
        "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

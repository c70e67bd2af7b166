//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Content files say
//! *what* the page contains; `site.toml` says where the fixed assets live and
//! which palette to use. Every key is optional: stock defaults are serialized
//! to a TOML table and the user file is merged on top.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── site.toml                # Optional, overrides stock defaults
//! ├── Titulo.txt
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! lang = "es"                       # <html lang>
//! fallback_title = "Pagina"         # <title> when Titulo.txt is empty
//!
//! [logo]
//! src = "assets/img/logos/logo-onsv.png"
//! href = "https://www.onsv.gob.pe/"
//! alt = "Logo ONSV"
//!
//! [images]
//! hero_png = "assets/img/im_principal.png"   # preferred hero image
//! hero_jpg = "assets/img/im_principal.jpg"   # used when the PNG is missing
//! hero_alt = "Imagen principal"
//! hero_background = "assets/img/Fondos/principal.png"
//! registration_background = "assets/img/Fondos/plataforma.png"
//! map = "assets/img/mapa.png"
//! platform = "assets/img/plataforma.png"
//! icons_dir = "assets/img/iconos"
//!
//! [colors]
//! divider = "#777777"
//! button_background = "#777777"
//! button_text = "#ffffff"
//! registration_accent = "#ba3034"
//! contact_background = "#575556"
//! link = "#1a5fb4"
//! ```
//!
//! Asset paths are relative to the directory the HTML file is written to.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the content root.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Document title used when `Titulo.txt` provides neither title nor eyebrow.
    pub fallback_title: String,
    /// Header logo.
    pub logo: LogoConfig,
    /// Fixed image assets referenced by the page.
    pub images: ImagesConfig,
    /// Palette emitted as CSS custom properties.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            fallback_title: "Pagina".to_string(),
            logo: LogoConfig::default(),
            images: ImagesConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate that required values are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        let paths = [
            ("logo.src", &self.logo.src),
            ("images.hero_png", &self.images.hero_png),
            ("images.hero_jpg", &self.images.hero_jpg),
            ("images.map", &self.images.map),
            ("images.platform", &self.images.platform),
            ("images.icons_dir", &self.images.icons_dir),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Header logo link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Image path.
    pub src: String,
    /// Link target, opened in a new tab.
    pub href: String,
    /// Alt text.
    pub alt: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            src: "assets/img/logos/logo-onsv.png".to_string(),
            href: "https://www.onsv.gob.pe/".to_string(),
            alt: "Logo ONSV".to_string(),
        }
    }
}

/// Paths of the fixed image assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Preferred hero image.
    pub hero_png: String,
    /// Hero image used when `hero_png` does not exist.
    pub hero_jpg: String,
    /// Alt text of the hero image.
    pub hero_alt: String,
    /// Background behind the hero band.
    pub hero_background: String,
    /// Background behind the registration band.
    pub registration_background: String,
    /// Map shown next to the beneficiaries block.
    pub map: String,
    /// Picture shown next to the registration block.
    pub platform: String,
    /// Directory holding indicator and social network icons.
    pub icons_dir: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            hero_png: "assets/img/im_principal.png".to_string(),
            hero_jpg: "assets/img/im_principal.jpg".to_string(),
            hero_alt: "Imagen principal".to_string(),
            hero_background: "assets/img/Fondos/principal.png".to_string(),
            registration_background: "assets/img/Fondos/plataforma.png".to_string(),
            map: "assets/img/mapa.png".to_string(),
            platform: "assets/img/plataforma.png".to_string(),
            icons_dir: "assets/img/iconos".to_string(),
        }
    }
}

impl ImagesConfig {
    /// Icon path for the indicator card with the given order.
    pub fn indicator_icon(&self, order: u32) -> String {
        format!("{}/indicador{}.png", self.icons_dir.trim_end_matches('/'), order)
    }

    /// Icon path for a social network entry; the name is the filename.
    pub fn social_icon(&self, name: &str) -> String {
        format!("{}/{}", self.icons_dir.trim_end_matches('/'), name)
    }
}

/// Page palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Bar between the body text and the sections below.
    pub divider: String,
    /// Beneficiaries button background.
    pub button_background: String,
    /// Beneficiaries button text.
    pub button_text: String,
    /// Registration button text.
    pub registration_accent: String,
    /// Contact footer band.
    pub contact_background: String,
    /// Links inside accordion panels.
    pub link: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            divider: "#777777".to_string(),
            button_background: "#777777".to_string(),
            button_text: "#ffffff".to_string(),
            registration_accent: "#ba3034".to_string(),
            contact_background: "#575556".to_string(),
            link: "#1a5fb4".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the content root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Landing Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Asset paths are relative to the directory the HTML file is written to.

# <html lang> attribute.
lang = "es"

# Document title used when Titulo.txt has neither a title nor an eyebrow line.
fallback_title = "Pagina"

# ---------------------------------------------------------------------------
# Header logo (links out in a new tab)
# ---------------------------------------------------------------------------
[logo]
src = "assets/img/logos/logo-onsv.png"
href = "https://www.onsv.gob.pe/"
alt = "Logo ONSV"

# ---------------------------------------------------------------------------
# Fixed images
# ---------------------------------------------------------------------------
[images]
# The PNG hero is used when it exists, then the JPG. If neither exists the
# page still references the PNG.
hero_png = "assets/img/im_principal.png"
hero_jpg = "assets/img/im_principal.jpg"
hero_alt = "Imagen principal"

# Band backgrounds.
hero_background = "assets/img/Fondos/principal.png"
registration_background = "assets/img/Fondos/plataforma.png"

# Pictures next to the BENEFICIARIOS and REGISTRO blocks.
map = "assets/img/mapa.png"
platform = "assets/img/plataforma.png"

# Indicator icons are <icons_dir>/indicador<N>.png; social icons are
# <icons_dir>/<name> where <name> comes from Redes.txt.
icons_dir = "assets/img/iconos"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
divider = "#777777"
button_background = "#777777"
button_text = "#ffffff"
registration_accent = "#ba3034"
contact_background = "#575556"
link = "#1a5fb4"
"##
}

/// Generate CSS custom properties from the palette and band backgrounds.
pub fn generate_theme_css(config: &SiteConfig) -> String {
    format!(
        r#":root {{
    --color-divider: {divider};
    --color-button-bg: {button_bg};
    --color-button-text: {button_text};
    --color-registration-accent: {accent};
    --color-contact-bg: {contact_bg};
    --color-link: {link};
    --hero-background: url("{hero_bg}");
    --registration-background: url("{registration_bg}");
}}"#,
        divider = config.colors.divider,
        button_bg = config.colors.button_background,
        button_text = config.colors.button_text,
        accent = config.colors.registration_accent,
        contact_bg = config.colors.contact_background,
        link = config.colors.link,
        hero_bg = config.images.hero_background,
        registration_bg = config.images.registration_background,
    )
}

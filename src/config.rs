//! Profile configuration module.
//!
//! Handles loading the `config.yml` profile description: who the page is for,
//! how it looks, and where it links to. One file, decoded in one shot; there
//! is no cascading or merging, because the profile page is a single document.
//!
//! ## Config File Shape
//!
//! ```yaml
//! Params:
//!   Avatar: "static/avatar.jpg"
//!   Name: "Victoria Cheng"
//!   Headline: "Software Developer"
//!   Theme:
//!     Background: "#1f2937"
//!     Text: "#f1f5f9"
//!     Button: "#60a5fa"
//!     ButtonText: "#f1f5f9"
//!     ButtonHover: "#1147bb"
//!     Link: "#1147bb"
//!     LinkText: "#f1f5f9"
//!     LinkHover: "#09265d"
//!   Socials:
//!     - Platform: "GitHub"
//!       Icon: "static/icons/github.svg"
//!       URL: "https://github.com/victoriacheng15"
//!   Links:
//!     - Name: "Portfolio"
//!       URL: "https://example.com"
//! ```
//!
//! ## Partial Configuration
//!
//! Every key is optional. Missing strings decode as empty, missing lists as
//! empty lists; the template decides what an empty value looks like. Theme
//! colors are passed through verbatim; any CSS color string is accepted.
//! Unknown keys are rejected to catch typos early.
//!
//! The PascalCase key names (`Name`, `ButtonHover`, `URL`, ...) are the wire
//! format; templates address fields under the same names (`Params.Name`,
//! `social.URL`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("error parsing config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Root of `config.yml`. Everything lives under the single `Params` mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "Params")]
    pub params: Params,
}

/// The profile itself: identity, theme, and the two link lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct Params {
    /// Path to the avatar image, relative to the generated site root.
    pub avatar: String,
    /// Display name, the page's main heading.
    pub name: String,
    /// One-line tagline shown under the name.
    pub headline: String,
    /// Colors handed to the template's styling directives.
    pub theme: Theme,
    /// Social-media entries, rendered in order.
    pub socials: Vec<Social>,
    /// Navigation links, rendered in order.
    pub links: Vec<Link>,
}

/// Named color values for the template. Passed through verbatim with no
/// format validation, so `#1f2937`, `rebeccapurple`, and `rgb(0 0 0)` all work.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub button: String,
    pub button_text: String,
    pub button_hover: String,
    pub link: String,
    pub link_text: String,
    pub link_hover: String,
}

/// One social-media entry. No uniqueness constraint: list the same platform
/// twice and it renders twice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct Social {
    pub platform: String,
    pub icon: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// One navigation link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct Link {
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Read and decode a profile config file.
///
/// Either the file decodes into a fully populated [`Config`] (with defaults
/// for missing keys) or an error is returned; there is no partial success.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// The stock `config.yml`, printed by `linkfolio gen-config`.
///
/// Documents every option and parses cleanly as-is.
pub fn stock_config_yml() -> &'static str {
    r##"# linkfolio profile configuration
#
# Every key is optional: missing strings decode as empty, missing lists as
# empty lists. Colors are passed to the template verbatim, so any CSS color
# string works.

Params:
  # Avatar image path, relative to the generated site root
  Avatar: "static/avatar.jpg"

  # Main heading and the tagline under it
  Name: "Your Name"
  Headline: "What you do, in one line"

  # Colors handed to the template's styling directives
  Theme:
    Background: "#1f2937"
    Text: "#f1f5f9"
    Button: "#60a5fa"
    ButtonText: "#f1f5f9"
    ButtonHover: "#1147bb"
    Link: "#1147bb"
    LinkText: "#f1f5f9"
    LinkHover: "#09265d"

  # Social-media buttons, rendered in order
  Socials:
    - Platform: "GitHub"
      Icon: "static/icons/github.svg"
      URL: "https://github.com/you"

  # Navigation links, rendered in order
  Links:
    - Name: "Website"
      URL: "https://example.com"
"##
}

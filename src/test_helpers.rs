//! Shared test utilities for the linkfolio test suite.
//!
//! Provides the canonical valid config/template fixtures plus a [`SiteFixture`]
//! that lays out a whole site workspace (config, template, static source) in a
//! temp directory, mirroring the conventional layout:
//!
//! ```text
//! <tmp>/
//! ├── config.yml
//! ├── template/
//! │   ├── index.html
//! │   └── static/
//! └── dist/            (created by the build, not by the fixture)
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::site::{self, BuildError, BuildReport};

/// The canonical valid config used across the suite.
pub fn valid_config_yml() -> &'static str {
    r##"Params:
  Avatar: "static/avatar.jpg"
  Name: "Test User"
  Headline: "Test Headline"
  Theme:
    Background: "#1f2937"
    Text: "#ffffff"
    Button: "#60a5fa"
    ButtonText: "#f1f5f9"
    ButtonHover: "#1147bb"
    Link: "#1147bb"
    LinkText: "#f1f5f9"
    LinkHover: "#09265D"
  Socials:
    - Platform: "GitHub"
      Icon: "static/icons/github.svg"
      URL: "https://github.com/test"
  Links:
    - Name: "Website"
      URL: "https://example.com"
"##
}

/// A template exercising every substitution the generator supports: scalar
/// fields, theme colors, and both iteration sections.
pub fn basic_template() -> &'static str {
    r#"<!DOCTYPE html>
<html>
<head>
  <title>{{ Params.Name }}</title>
  <style>body { background: {{ Params.Theme.Background }}; }</style>
</head>
<body>
  <img src="{{ Params.Avatar }}" alt="{{ Params.Name }}">
  <h1>{{ Params.Name }}</h1>
  <p>{{ Params.Headline }}</p>
  {% for social in Params.Socials %}
  <a href="{{ social.URL }}">{{ social.Platform }}</a>
  {% endfor %}
  {% for link in Params.Links %}
  <a href="{{ link.URL }}">{{ link.Name }}</a>
  {% endfor %}
</body>
</html>
"#
}

/// Write `content` to `path`, creating parent directories. Returns the path.
pub fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

/// A complete site workspace in a temp directory.
pub struct SiteFixture {
    pub root: TempDir,
    pub config_path: PathBuf,
    pub template_path: PathBuf,
    pub static_src: PathBuf,
    pub static_dst: PathBuf,
    pub output_dir: PathBuf,
}

impl SiteFixture {
    /// Run the build with this fixture's paths.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        site::build_site(
            &self.config_path,
            &self.template_path,
            &self.output_dir,
            &self.static_src,
            &self.static_dst,
        )
    }
}

/// Lay out a site workspace: config file, template file, and an empty static
/// source directory. The output directory is only named, never created;
/// creating it is the build's job.
pub fn setup_site(config_yml: &str, template: &str) -> SiteFixture {
    let root = TempDir::new().unwrap();

    let config_path = write_file(&root.path().join("config.yml"), config_yml);
    let template_path = write_file(&root.path().join("template/index.html"), template);
    let static_src = root.path().join("template/static");
    fs::create_dir_all(&static_src).unwrap();

    let output_dir = root.path().join("dist");
    let static_dst = output_dir.join("static");

    SiteFixture {
        root,
        config_path,
        template_path,
        static_src,
        static_dst,
        output_dir,
    }
}

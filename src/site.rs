//! Site building orchestration.
//!
//! One build is one linear pass: ensure the output directories exist, load the
//! profile config, parse the user's template, render `index.html`, copy the
//! static assets. The first failing step aborts the build and names itself in
//! the error; steps already completed are not undone, so a failed run can
//! leave `index.html` behind without its static files.
//!
//! ## Templates
//!
//! The template is a user-supplied HTML file with [Tera](https://keats.github.io/tera/)
//! directives, loaded at runtime; the generator ships no markup of its own.
//! The rendering context is the decoded config under its wire-format names:
//!
//! ```html
//! <h1>{{ Params.Name }}</h1>
//! <p>{{ Params.Headline }}</p>
//! {% for social in Params.Socials %}
//!   <a href="{{ social.URL }}">{{ social.Platform }}</a>
//! {% endfor %}
//! {% for link in Params.Links %}
//!   <a href="{{ link.URL }}">{{ link.Name }}</a>
//! {% endfor %}
//! ```
//!
//! Referencing a field that does not exist is a render error, not an empty
//! string, so a typo in a template fails the build.

use crate::assets::{self, CopyError};
use crate::config::{self, Config, ConfigError};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tera::Tera;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("error creating output directory: {0}")]
    CreateOutputDir(io::Error),
    #[error("error loading config: {0}")]
    Config(#[from] ConfigError),
    #[error("error reading template: {0}")]
    TemplateRead(io::Error),
    #[error("error parsing template: {0}")]
    Template(tera::Error),
    #[error("error creating output file: {0}")]
    CreateIndex(io::Error),
    #[error("error rendering template: {0}")]
    Render(tera::Error),
    #[error("error copying static files: {0}")]
    StaticAssets(#[from] CopyError),
    #[error("static source does not exist: {}", .0.display())]
    MissingStaticSource(PathBuf),
}

/// What a successful build produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildReport {
    pub index_path: PathBuf,
    pub static_files: usize,
}

/// The single template slot in the per-build Tera instance.
const TEMPLATE_NAME: &str = "index.html";

/// Build the site: render `index.html` into `output_dir` and copy the static
/// tree from `static_src` to `static_dst`.
pub fn build_site(
    config_path: &Path,
    template_path: &Path,
    output_dir: &Path,
    static_src: &Path,
    static_dst: &Path,
) -> Result<BuildReport, BuildError> {
    fs::create_dir_all(static_dst).map_err(BuildError::CreateOutputDir)?;

    let config = config::load(config_path)?;
    let tera = load_template(template_path)?;

    let index_path = output_dir.join("index.html");
    let out = File::create(&index_path).map_err(BuildError::CreateIndex)?;
    render(&tera, &config, out)?;

    let static_files = assets::copy_dir(static_src, static_dst)?;

    Ok(BuildReport {
        index_path,
        static_files,
    })
}

/// Validate the three build inputs without writing anything: the config
/// decodes, the template parses, and the static source exists.
pub fn check(
    config_path: &Path,
    template_path: &Path,
    static_src: &Path,
) -> Result<Config, BuildError> {
    let config = config::load(config_path)?;
    load_template(template_path)?;
    if !static_src.is_dir() {
        return Err(BuildError::MissingStaticSource(static_src.to_path_buf()));
    }
    Ok(config)
}

/// Read and parse the template file into a single-template Tera instance.
fn load_template(path: &Path) -> Result<Tera, BuildError> {
    let source = fs::read_to_string(path).map_err(BuildError::TemplateRead)?;
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, &source)
        .map_err(BuildError::Template)?;
    Ok(tera)
}

/// Execute the template against the config, streaming into `out`.
fn render(tera: &Tera, config: &Config, out: impl io::Write) -> Result<(), BuildError> {
    let context = tera::Context::from_serialize(config).map_err(BuildError::Render)?;
    tera.render_to(TEMPLATE_NAME, &context, out)
        .map_err(BuildError::Render)
}

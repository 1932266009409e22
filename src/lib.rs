//! # linkfolio
//!
//! A minimal static site generator for personal link-in-bio profile pages.
//! One YAML file describes the profile (name, headline, avatar, theme colors,
//! social links, navigation links), and one build turns it into a single HTML
//! page plus a verbatim copy of the static assets.
//!
//! # Architecture: One Linear Pass
//!
//! ```text
//! config.yml ──► load ──► render template ──► dist/index.html
//! template/static ──────► copy verbatim  ──► dist/static/
//! ```
//!
//! There is no pipeline state, no cache, and no incremental mode: every build
//! fully re-renders and re-copies. A run either completes or stops at the
//! first failing step with an error naming that step.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.yml` loading and the profile data model |
//! | [`site`] | Build orchestration: render `index.html`, copy assets |
//! | [`assets`] | Recursive static-directory copy (skips `.gitkeep`) |
//! | [`output`] | CLI output formatting: config summary and build report |
//!
//! # Design Decisions
//!
//! ## Runtime Templates Over Compile-Time HTML
//!
//! The page markup belongs to the user, not to this binary: the template is an
//! external HTML file with [Tera](https://keats.github.io/tera/) directives,
//! parsed at build time. Swapping the page design never means recompiling the
//! generator. Interpolation into `.html` templates is auto-escaped, and a
//! directive referencing a field that does not exist fails the build instead
//! of rendering an empty hole.
//!
//! ## YAML Profile Config
//!
//! The profile is one `config.yml` document decoded with serde. Every key is
//! optional (missing values decode as empty), unknown keys are rejected to
//! catch typos, and theme colors are passed through verbatim since the
//! generator has no opinion about what a color string looks like.
//!
//! ## Non-Atomic Output
//!
//! Completed steps are not undone on failure: if the static copy fails after
//! `index.html` was rendered, the page stays in place. The output directory is
//! cheap to delete and every build regenerates it from scratch, so partial
//! output is a diagnosis aid rather than a hazard.

pub mod assets;
pub mod config;
pub mod output;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;

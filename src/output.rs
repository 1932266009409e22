//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure, with no I/O and no side effects. Errors never pass through here;
//! they go to stderr from `main`.

use crate::config::Config;
use crate::site::BuildReport;

/// Format the loaded-config summary shown before a build.
///
/// ```text
/// Loaded config:
///   Name: Victoria Cheng
///   Headline: Software Developer
///   Avatar: static/avatar.jpg
///   Theme Background: #1f2937
///   Socials: 5
///   Links: 2
/// ```
pub fn format_config_summary(config: &Config) -> Vec<String> {
    let params = &config.params;
    vec![
        "Loaded config:".to_string(),
        format!("  Name: {}", params.name),
        format!("  Headline: {}", params.headline),
        format!("  Avatar: {}", params.avatar),
        format!("  Theme Background: {}", params.theme.background),
        format!("  Socials: {}", params.socials.len()),
        format!("  Links: {}", params.links.len()),
    ]
}

/// Format the build report shown after a successful build.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    vec![
        format!("Generated {}", report.index_path.display()),
        format!("Copied {} static files", report.static_files),
    ]
}

pub fn print_config_summary(config: &Config) {
    for line in format_config_summary(config) {
        println!("{}", line);
    }
    println!();
}

pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{}", line);
    }
}

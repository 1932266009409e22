use clap::{Parser, Subcommand};
use linkfolio::{config, output, site};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup; called exactly once
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "linkfolio")]
#[command(about = "Static site generator for personal link pages")]
#[command(long_about = "\
Static site generator for personal link pages

One config.yml describes the profile: name, headline, avatar, theme colors,
social links, and navigation links. One build renders it through your HTML
template and copies the static assets next to the result.

Conventional layout:

  config.yml                # Profile config
  template/
  ├── index.html            # Tera template: {{ Params.Name }}, loops, ...
  └── static/               # Copied verbatim (except .gitkeep files)
  dist/                     # Output: index.html + static/

Every path is a flag, so none of the conventions are load-bearing.

Run 'linkfolio gen-config' to print a documented config.yml.")]
#[command(version = version_string())]
struct Cli {
    /// Profile config file
    #[arg(long, default_value = "config.yml", global = true)]
    config: PathBuf,

    /// HTML template file
    #[arg(long, default_value = "template/index.html", global = true)]
    template: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Static assets source directory
    #[arg(long, default_value = "template/static", global = true)]
    static_src: PathBuf,

    /// Static assets destination directory
    #[arg(long, default_value = "dist/static", global = true)]
    static_dst: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the profile page and copy static assets
    Build,
    /// Validate config, template, and static source without writing
    Check,
    /// Print a stock config.yml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load(&cli.config)?;
            output::print_config_summary(&config);

            let report = site::build_site(
                &cli.config,
                &cli.template,
                &cli.output,
                &cli.static_src,
                &cli.static_dst,
            )?;
            output::print_build_report(&report);
            println!("Build complete. Files are in {}", cli.output.display());
        }
        Command::Check => {
            let config = site::check(&cli.config, &cli.template, &cli.static_src)?;
            output::print_config_summary(&config);
            println!("Inputs are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_yml());
        }
    }

    Ok(())
}

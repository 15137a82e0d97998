// SPDX-License-Identifier: PMPL-1.0-or-later

//! memorial-site: render a localized memorial page from JSON documents
//!
//! Reads `data/config.json` and `data/content.<locale>.json` from a site
//! root (or a base URL) and writes static pages, inspects the render
//! output, or drives the interactive pieces (language switch, share,
//! submission link) from the command line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use memorial_site::build::{self, BuildConfig};
use memorial_site::i18n::native_name;
use memorial_site::loader::{content_path, load_config, DocumentSource, FsSource, HttpSource};
use memorial_site::locale::{preferred_language_from_env, LocaleSet};
use memorial_site::share::{HeadlessHost, ShareOutcome};
use memorial_site::site::{Site, SiteOptions};
use memorial_site::storage::{FileStore, PreferenceStore, SessionStore};
use memorial_site::view::ViewFormat;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "memorial-site")]
#[command(version)]
#[command(about = "Render a localized single-page memorial site from JSON documents")]
#[command(long_about = None)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one static page per locale, the assets and a build manifest
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },

    /// Render the page for one locale as HTML
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        locale: LocaleArgs,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the render output as a list of element updates
    View {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        locale: LocaleArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ViewFormat,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the configured locales and whether their content exists
    Locales {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Switch language (next configured locale, or --to) and store the choice
    Switch {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        locale: LocaleArgs,

        /// Target locale instead of the next one
        #[arg(long)]
        to: Option<String>,
    },

    /// Show what the share button does for a page URL
    Share {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        locale: LocaleArgs,

        /// URL of the published page
        #[arg(long)]
        url: String,
    },

    /// Print the memory-submission mailto link
    Mailto {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        locale: LocaleArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Site root containing data/ and assets/
    #[arg(value_name = "SITE", default_value = ".")]
    site: PathBuf,

    /// Fetch documents from this URL instead of the site root
    #[arg(long)]
    base_url: Option<String>,
}

impl SourceArgs {
    fn source(&self) -> Box<dyn DocumentSource> {
        match &self.base_url {
            Some(url) => Box::new(HttpSource::new(url)),
            None => Box::new(FsSource::new(&self.site)),
        }
    }
}

#[derive(Args)]
struct LocaleArgs {
    /// Locale to render (unsupported codes use the default locale)
    #[arg(short, long)]
    locale: Option<String>,

    /// Preference file remembering the chosen locale
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Pick the locale from LC_ALL / LC_MESSAGES / LANG
    #[arg(long)]
    detect: bool,
}

type CliSite = Site<Box<dyn DocumentSource>, Box<dyn PreferenceStore>>;

fn open_site(source: &SourceArgs, locale: &LocaleArgs) -> Result<CliSite> {
    let prefs: Box<dyn PreferenceStore> = match &locale.prefs {
        Some(path) => Box::new(FileStore::open(path)),
        None => Box::new(SessionStore::new()),
    };
    let options = SiteOptions {
        requested_locale: locale.locale.clone(),
        preferred_language: if locale.detect {
            preferred_language_from_env()
        } else {
            None
        },
    };
    Site::load(source.source(), prefs, &options)
}

fn emit(text: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("{:#}", err);
    }
    if let Err(err) = run(cli.command) {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Build { source, output } => {
            let config = BuildConfig {
                site_root: source.site,
                base_url: source.base_url,
                output,
            };
            let manifest = build::build_site(&config)?;
            build::print_summary(&manifest, &config.output);
        }

        Commands::Render {
            source,
            locale,
            output,
        } => {
            let site = open_site(&source, &locale)?;
            emit(&site.page().to_html(), output)?;
        }

        Commands::View {
            source,
            locale,
            format,
            output,
        } => {
            let site = open_site(&source, &locale)?;
            emit(&format.serialize(&site.render())?, output)?;
        }

        Commands::Locales { source } => {
            let documents = source.source();
            let config = load_config(&*documents)
                .with_context(|| format!("Failed to load site configuration from {}", documents.describe()))?;
            let locales = LocaleSet::from_config(&config);

            println!("{}", "LOCALES".bold().yellow());
            for locale in locales.available() {
                let marker = if locale == locales.default_locale() {
                    "default".cyan().to_string()
                } else {
                    String::new()
                };
                let status = match documents.fetch(&content_path(locale)) {
                    Ok(_) => "content".green(),
                    Err(_) => "missing".red(),
                };
                println!(
                    "  {:<4} {:<12} {:<8} {}",
                    locale.code(),
                    native_name(locale.code()).unwrap_or("?"),
                    status,
                    marker
                );
            }
        }

        Commands::Switch {
            source,
            locale,
            to,
        } => {
            let mut site = open_site(&source, &locale)?;
            let from = site.locale().clone();
            let switch = match to {
                Some(code) => site.set_locale(&code)?,
                None => site.switch_locale()?,
            };
            let note = if switch.fell_back {
                format!(" (content from {})", site.served_locale()).as_str().yellow().to_string()
            } else {
                String::new()
            };
            println!("{} -> {}{}", from, switch.locale.code().bold(), note);
            if locale.prefs.is_none() {
                println!("  {}", "not persisted: pass --prefs to remember the choice".dimmed());
            }
        }

        Commands::Share {
            source,
            locale,
            url,
        } => {
            let site = open_site(&source, &locale)?;
            let mut host = HeadlessHost::default();
            match site.share(&url, &mut host) {
                ShareOutcome::Native => println!("{}", "shared natively".green()),
                ShareOutcome::NativeFailed => println!("{}", "native share cancelled".yellow()),
                ShareOutcome::Copied(label) => println!("copied, button shows \"{}\"", label.shown),
                ShareOutcome::Prompted { message, url } => println!("{} {}", message, url),
            }
        }

        Commands::Mailto { source, locale } => {
            let site = open_site(&source, &locale)?;
            println!("{}", site.submission_mailto());
        }
    }

    Ok(())
}

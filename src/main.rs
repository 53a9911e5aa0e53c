//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Index a markdown/MDX blog: posts, series and tables of contents", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Series the post belongs to
        #[arg(short, long)]
        series: Option<String>,

        /// Position within the series
        #[arg(short, long, requires = "series")]
        order: Option<i64>,
    },

    /// List all posts, newest first
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a post's metadata, series position and contents
    Show {
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show series in reading order
    Series {
        /// Only this series
        name: Option<String>,
    },

    /// Print a post's table of contents
    Toc { slug: String },

    /// Render a post body to HTML
    Render { slug: String },

    /// Look up a glossary term
    Define { term: String },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized folio site in {:?}", target_dir);
        }

        Commands::New {
            title,
            series,
            order,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            let path = site.new_post(&title, series.as_deref(), order)?;
            println!("Created: {:?}", path);
        }

        Commands::List { json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, json)?;
        }

        Commands::Show { slug, json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, &slug, json)?;
        }

        Commands::Series { name } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::series::run(&site, name.as_deref())?;
        }

        Commands::Toc { slug } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::toc(&site, &slug)?;
        }

        Commands::Render { slug } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::render(&site, &slug)?;
        }

        Commands::Define { term } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::define::run(&site, &term)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

//! CLI entry point for press-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "press-blog")]
#[command(version)]
#[command(about = "Site configuration and post index for a personal blog", long_about = None)]
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
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name to use instead of the slugified title
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show this page of the index
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Write the post index as JSON
    Data {
        /// Output file ("-" for stdout); defaults to the configured data file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the resolved site configuration
    Config,

    /// Remove the generated post index
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "press_blog=debug,info"
    } else {
        "press_blog=info"
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
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            press_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New { title, name } => {
            let blog = press_blog::Blog::new(&base_dir)?;
            let path = press_blog::commands::new::create_post(&blog, &title, name.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { page } => {
            let blog = press_blog::Blog::new(&base_dir)?;
            press_blog::commands::list::run(&blog, page)?;
        }

        Commands::Data { out } => {
            let blog = press_blog::Blog::new(&base_dir)?;
            press_blog::commands::data::run(&blog, out.as_deref())?;
        }

        Commands::Config => {
            let blog = press_blog::Blog::new(&base_dir)?;
            press_blog::commands::config::run(&blog)?;
        }

        Commands::Clean => {
            let blog = press_blog::Blog::new(&base_dir)?;
            blog.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}

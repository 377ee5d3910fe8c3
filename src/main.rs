//! CLI entry point for valet-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "valet-blog")]
#[command(version = "0.1.0")]
#[command(about = "A small static blog renderer", long_about = None)]
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
    /// List posts and updates
    List {
        /// Only show posts in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Render one article as an HTML fragment
    Render {
        /// Post slug or id
        slug: String,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the front-page news cards
    Index {
        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a listing page with sidebars and pagination
    Page {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search posts
    Search {
        /// Term to search for
        term: Option<String>,

        /// Emit an HTML results fragment instead of plain text
        #[arg(long)]
        html: bool,

        /// Show recent searches
        #[arg(long)]
        history: bool,

        /// Clear the search history
        #[arg(long)]
        clear_history: bool,
    },

    /// Manage post comments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum CommentAction {
    /// Add a comment to a post
    Add {
        /// Post id
        #[arg(long)]
        post: String,

        /// Commenter name
        #[arg(long)]
        name: String,

        /// Commenter email
        #[arg(long)]
        email: String,

        /// Comment text
        #[arg(long)]
        text: String,
    },

    /// List comments on a post
    List {
        /// Post id
        #[arg(long)]
        post: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "valet_blog=debug,info"
    } else {
        "valet_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = valet_blog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { category } => {
            valet_blog::commands::list::run(&blog, category.as_deref())?;
        }

        Commands::Render { slug, output } => {
            valet_blog::commands::render::article(&blog, &slug, output.as_deref())?;
        }

        Commands::Index { output } => {
            valet_blog::commands::render::index(&blog, output.as_deref())?;
        }

        Commands::Page {
            page,
            category,
            output,
        } => {
            valet_blog::commands::render::page(&blog, page, category.as_deref(), output.as_deref())?;
        }

        Commands::Search {
            term,
            html,
            history,
            clear_history,
        } => {
            if clear_history {
                valet_blog::commands::search::clear_history(&blog)?;
            } else if history {
                valet_blog::commands::search::history(&blog)?;
            } else if let Some(term) = term {
                valet_blog::commands::search::run(&blog, &term, html)?;
            } else {
                anyhow::bail!("Provide a search term, --history or --clear-history");
            }
        }

        Commands::Comment { action } => match action {
            CommentAction::Add {
                post,
                name,
                email,
                text,
            } => {
                valet_blog::commands::comment::add(&blog, &post, &name, &email, &text)?;
            }
            CommentAction::List { post } => {
                valet_blog::commands::comment::list(&blog, &post)?;
            }
        },

        Commands::Version => {
            println!("valet-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

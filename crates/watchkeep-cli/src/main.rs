use clap::{ArgAction, Parser, Subcommand};
use watchkeep_models::Category;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "watchkeep")]
#[command(about = "Watchkeep - track what you want to watch and play")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a title to the watchlist
    #[command(long_about = "Add a title to the watchlist. The title is looked up against the configured metadata providers (TMDb then OMDb for movies and TV, RAWG for games, Jikan for anime); a failed lookup still adds the item, just without poster/year/rating.")]
    Add {
        /// Title to add
        title: String,

        /// Your own notes; defaults to the fetched plot summary
        #[arg(short, long, default_value = "")]
        description: String,

        /// Category: movie, tv, anime, or game
        #[arg(short, long)]
        category: Category,
    },
    /// List watchlist items (unwatched by default, newest first)
    List {
        /// Show watched items instead of unwatched
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "all")]
        watched: bool,

        /// Show both watched and unwatched items
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        /// Only items in this category
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Mark an item watched, or a watched item unwatched
    Toggle {
        /// Item id (a unique prefix is enough)
        id: String,
    },
    /// Edit an item's title, notes, or category
    Edit {
        /// Item id (a unique prefix is enough)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New notes
        #[arg(long)]
        description: Option<String>,

        /// New category: movie, tv, anime, or game
        #[arg(long)]
        category: Option<Category>,
    },
    /// Remove an item from the watchlist
    Remove {
        /// Item id (a unique prefix is enough)
        id: String,
    },
    /// View or change configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks API keys)
    Show,
    /// Set a configuration value
    #[command(long_about = "Set a configuration value. Valid keys: tmdb_api_key, omdb_api_key, rawg_api_key, timeout_secs.")]
    Set {
        key: String,
        value: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Add {
            title,
            description,
            category,
        } => commands::add::run_add(&title, &description, category, &output).await,
        Commands::List {
            watched,
            all,
            category,
        } => commands::list::run_list(watched, all, category, &output),
        Commands::Toggle { id } => commands::toggle::run_toggle(&id, &output),
        Commands::Edit {
            id,
            title,
            description,
            category,
        } => commands::edit::run_edit(&id, title, description, category, &output),
        Commands::Remove { id } => commands::remove::run_remove(&id, &output),
        Commands::Config { cmd } => commands::config::run_config(cmd, &output),
    }
}

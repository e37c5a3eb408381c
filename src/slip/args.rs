use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slip")]
#[command(version = env!("SLIP_VERSION"))]
#[command(about = "Block-based notes you can edit as Markdown or as a rich document", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json and config.json (defaults to $SLIP_HOME, then the
    /// platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new slip
    #[command(alias = "n")]
    Create {
        /// Title of the slip (defaults to "Untitled")
        title: Option<String>,

        /// Body as Markdown
        body: Option<String>,
    },

    /// List slips
    #[command(alias = "ls")]
    List,

    /// View one or more slips
    #[command(alias = "v")]
    View {
        /// Indexes of the slips (e.g. 1 p1 2-4) or a title search term
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Render the HTML preview
        #[arg(long, conflicts_with_all = ["markdown", "tree"])]
        html: bool,

        /// Show as Markdown
        #[arg(long, conflicts_with = "tree")]
        markdown: bool,

        /// Show the rich-editor document JSON
        #[arg(long)]
        tree: bool,
    },

    /// Edit a slip as Markdown in $EDITOR
    #[command(alias = "e")]
    Edit {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Rename a slip
    Rename {
        /// Index of the slip
        index: String,

        /// New title
        title: String,
    },

    /// Duplicate one or more slips
    #[command(alias = "dup")]
    Duplicate {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more slips
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Pin one or more slips
    Pin {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Unpin one or more slips
    Unpin {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Search titles and content
    Search { term: String },

    /// Export slips as markdown, html or tree JSON
    Export {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Output format: markdown, html or tree
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Import Markdown or tree JSON files as new slips
    Import {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Word and character counts
    Stats {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Overview: counts, recent and today's slips
    Home,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., debounce-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Seed the welcome slip into an empty store
    Init,
}

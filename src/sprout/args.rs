use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "sprout", bin_name = "sprout", version = get_version())]
#[command(about = "Command-line houseplant watering tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this directory for plant data instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a plant to track
    #[command(alias = "a")]
    Add {
        /// Plant name (see `sprout names` for suggestions)
        name: String,

        /// Days between waterings
        #[arg(short, long, value_name = "DAYS")]
        every: String,

        /// Date the plant was last watered (YYYY-MM-DD, defaults to now)
        #[arg(long, value_name = "DATE")]
        watered: Option<String>,
    },

    /// List plants and their watering status
    #[command(alias = "ls")]
    List,

    /// Mark one or more plants as watered
    #[command(alias = "w")]
    Water {
        /// Indexes of the plants (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Stop tracking one or more plants
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the plants (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Print the plant name suggestion list
    Names,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., names)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory (optional utility)
    Init,
}

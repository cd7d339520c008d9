use clap::{Parser, Subcommand};
use quickspace::commands::*;
use quickspace::core::{
    error::QuickspaceError, print_error, print_error_with_structured_usage,
};
use std::env;

#[derive(Parser)]
#[command(name = "quickspace")]
#[command(about = "Open workspace directories in your editor, with favorites")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List workspace directories and saved favorites
    List,
    /// Open one or more directories in the editor
    Open {
        /// Directory names under the workspace root
        names: Vec<String>,
    },
    /// Save a set of directories as a favorite
    Favorite {
        /// Directory names under the workspace root
        names: Vec<String>,
    },
    /// Show numbered favorites or open one by its number
    Favorites {
        /// Favorite number to open (if provided)
        index: Option<usize>,
    },
    /// Rename a favorite by its number
    Rename {
        /// Favorite number from 'quickspace favorites'
        index: usize,
        /// New name for the favorite
        name: Vec<String>,
    },
    /// Remove a favorite by its number
    Remove {
        /// Favorite number from 'quickspace favorites'
        index: usize,
    },
    /// Show or change settings
    Config {
        /// Workspace root containing your projects
        #[arg(long)]
        root: Option<String>,
        /// Include dot-directories in listings
        #[arg(long, value_name = "BOOL")]
        show_hidden: Option<bool>,
        /// Editor binary used to open directories
        #[arg(long)]
        editor: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::List => execute_list(),
        Commands::Open { names } => execute_open(names),
        Commands::Favorite { names } => execute_favorite(names),
        Commands::Favorites { index } => execute_favorites(index),
        Commands::Rename { index, name } => execute_rename(index, name),
        Commands::Remove { index } => execute_remove(index),
        Commands::Config {
            root,
            show_hidden,
            editor,
        } => execute_config(root, show_hidden, editor),
    };

    if let Err(e) = result {
        report_error(e);
        std::process::exit(1);
    }
}

fn report_error(error: QuickspaceError) {
    match error {
        QuickspaceError::RootNotConfigured { config_path } => {
            print_error_with_structured_usage(
                &format!(
                    "Repository directory is not configured (settings file: {})",
                    config_path.display()
                ),
                &["quickspace config --root <path>"],
                &[
                    ("--root <path>", "Workspace root containing your projects"),
                    ("--show-hidden <bool>", "Include dot-directories in listings"),
                    ("--editor <name>", "Editor binary used to open directories"),
                ],
            );
        }
        other => print_error(&other.to_string()),
    }
}

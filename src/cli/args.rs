//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build node collections from descriptors and inspect, search and render them
///
/// Descriptors have the form `kind[:key[:param]]`, e.g. `keyword:fs:24`,
/// `control:'`, `text:Hello`, `group`.
#[derive(Parser, Debug)]
#[command(name = "rtfnodes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List nodes with their index, kind, key and parameter
    List {
        #[arg(required = true, value_name = "DESCRIPTOR")]
        nodes: Vec<String>,
    },

    /// Render nodes as a tree
    Tree {
        #[arg(required = true, value_name = "DESCRIPTOR")]
        nodes: Vec<String>,
    },

    /// Print the index of the first node with the given key
    Find {
        /// Key to search for
        key: String,
        /// First index to consider
        #[arg(short, long, default_value_t = 0)]
        from: usize,
        #[arg(required = true, value_name = "DESCRIPTOR")]
        nodes: Vec<String>,
    },

    /// List every node with the given key
    Select {
        /// Key to search for
        key: String,
        #[arg(required = true, value_name = "DESCRIPTOR")]
        nodes: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show the global config file location
    Path,
}

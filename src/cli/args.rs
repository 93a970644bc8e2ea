//! CLI argument definitions using clap
//!
//! Commands:
//! - vklayer validate --store <path> --method <m> --response <file>
//! - vklayer template <put|remove|remove-all|list> --store <path>
//! - vklayer bootstrap --store <path> --archive <tar>
//! - vklayer request --method <m> [--param key=value ...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vklayer - VK API client layer with template-based response validation
#[derive(Parser, Debug)]
#[command(name = "vklayer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a response file against the stored template
    Validate {
        /// Template store root
        #[arg(long, default_value = "./vklayer-store")]
        store: PathBuf,

        /// API method whose template to validate against
        #[arg(long)]
        method: String,

        /// Path to the JSON response to validate
        #[arg(long)]
        response: PathBuf,

        /// Check categories to run (keys, sub-entity-keys, types, rules);
        /// all of them when omitted
        #[arg(long, value_delimiter = ',')]
        checks: Option<Vec<String>>,
    },

    /// Manage stored templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Unpack default templates into an empty store
    Bootstrap {
        /// Template store root
        #[arg(long, default_value = "./vklayer-store")]
        store: PathBuf,

        /// Tar archive holding the default templates
        #[arg(long)]
        archive: PathBuf,
    },

    /// Print the request URL for a method
    Request {
        /// API method to build a request for
        #[arg(long)]
        method: String,

        /// Extra query parameters as key=value, repeatable
        #[arg(long = "param")]
        params: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Store a template for a method
    Put {
        /// Template store root
        #[arg(long, default_value = "./vklayer-store")]
        store: PathBuf,

        /// API method the template belongs to
        #[arg(long)]
        method: String,

        /// Path to the template JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Remove the template for a method
    Remove {
        /// Template store root
        #[arg(long, default_value = "./vklayer-store")]
        store: PathBuf,

        /// API method whose template to remove
        #[arg(long)]
        method: String,
    },

    /// Remove every stored template
    RemoveAll {
        /// Template store root
        #[arg(long, default_value = "./vklayer-store")]
        store: PathBuf,
    },

    /// List methods with a stored template
    List {
        /// Template store root
        #[arg(long, default_value = "./vklayer-store")]
        store: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

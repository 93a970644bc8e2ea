//! CLI module
//!
//! Command-line interface over the template store, the validator and
//! the request builder:
//! - validate: check a response file against a stored template
//! - template: put / remove / remove-all / list
//! - bootstrap: unpack shipped default templates
//! - request: print the URL a method call would use

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, TemplateAction};
pub use commands::{
    bootstrap, request, run_command, template_list, template_put, template_remove,
    template_remove_all, validate,
};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

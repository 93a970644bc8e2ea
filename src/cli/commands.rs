//! CLI command implementations
//!
//! Thin wrappers over the library: parse the arguments into typed
//! values, call into the store/validator/request builder, print the
//! outcome. All output goes to stdout; errors propagate to main.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::api::{Method, Params, RequestBuilder};
use crate::observability::Logger;
use crate::template::{bootstrap_from_archive, TemplateStore};
use crate::validation::{ResponseValidator, ValidationChecks};

use super::args::{Cli, Command, TemplateAction};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command line.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Validate {
            store,
            method,
            response,
            checks,
        } => validate(&store, &method, &response, checks.as_deref()),
        Command::Template { action } => match action {
            TemplateAction::Put {
                store,
                method,
                file,
            } => template_put(&store, &method, &file),
            TemplateAction::Remove { store, method } => template_remove(&store, &method),
            TemplateAction::RemoveAll { store } => template_remove_all(&store),
            TemplateAction::List { store } => template_list(&store),
        },
        Command::Bootstrap { store, archive } => bootstrap(&store, &archive),
        Command::Request { method, params } => request(&method, &params),
    }
}

fn parse_method(raw: &str) -> CliResult<Method> {
    Method::from_str(raw).map_err(CliError::from)
}

fn read_json(path: &Path) -> CliResult<Value> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("cannot read '{}': {}", path.display(), e)))?;
    Ok(serde_json::from_str(&raw)?)
}

fn parse_checks(names: &[String]) -> CliResult<ValidationChecks> {
    let mut checks = ValidationChecks::none();
    for name in names {
        match name.as_str() {
            "keys" => checks.keys = true,
            "sub-entity-keys" => checks.sub_entity_keys = true,
            "types" => checks.types_of_values = true,
            "rules" => checks.extended_rules = true,
            other => {
                return Err(CliError::invalid_argument(format!(
                    "unknown check category '{}'",
                    other
                )))
            }
        }
    }
    Ok(checks)
}

/// `vklayer validate`
pub fn validate(
    store_root: &Path,
    method: &str,
    response_path: &Path,
    checks: Option<&[String]>,
) -> CliResult<()> {
    let method = parse_method(method)?;
    let response = read_json(response_path)?;
    let checks = match checks {
        Some(names) => parse_checks(names)?,
        None => ValidationChecks::all(),
    };

    let store = TemplateStore::open(store_root)?;
    let validator = ResponseValidator::new(&store);
    match validator.validate_with_checks(method, &response, checks) {
        Ok(()) => {
            println!("valid: {}", method.endpoint());
            Ok(())
        }
        Err(e) => Err(CliError::validation_failed(e.to_string())),
    }
}

/// `vklayer template put`
pub fn template_put(store_root: &Path, method: &str, file: &Path) -> CliResult<()> {
    let method = parse_method(method)?;
    let template = read_json(file)?;

    let store = TemplateStore::open(store_root)?;
    store.put(method, template)?;
    Logger::info("cli", &format!("template stored for '{}'", method.endpoint()));
    Ok(())
}

/// `vklayer template remove`
pub fn template_remove(store_root: &Path, method: &str) -> CliResult<()> {
    let method = parse_method(method)?;
    let store = TemplateStore::open(store_root)?;
    store.remove(method)?;
    Logger::info("cli", &format!("template removed for '{}'", method.endpoint()));
    Ok(())
}

/// `vklayer template remove-all`
pub fn template_remove_all(store_root: &Path) -> CliResult<()> {
    let store = TemplateStore::open(store_root)?;
    store.remove_all()?;
    Logger::info("cli", "all templates removed");
    Ok(())
}

/// `vklayer template list`
pub fn template_list(store_root: &Path) -> CliResult<()> {
    let store = TemplateStore::open(store_root)?;
    for endpoint in store.list()? {
        println!("{}", endpoint);
    }
    Ok(())
}

/// `vklayer bootstrap`
pub fn bootstrap(store_root: &Path, archive: &Path) -> CliResult<()> {
    let store = TemplateStore::open(store_root)?;
    let written = bootstrap_from_archive(&store, archive)?;
    if written == 0 {
        println!("store already populated, nothing unpacked");
    } else {
        println!("unpacked {} template(s)", written);
    }
    Ok(())
}

/// `vklayer request`
pub fn request(method: &str, raw_params: &[String]) -> CliResult<()> {
    let method = parse_method(method)?;

    let mut params = Params::new();
    for raw in raw_params {
        let (key, value) = raw.split_once('=').ok_or_else(|| {
            CliError::invalid_argument(format!("parameter '{}' is not key=value", raw))
        })?;
        params.insert(key.to_string(), value.to_string());
    }

    let url = RequestBuilder::new().build(method, &params)?;
    println!("{}", url);
    Ok(())
}

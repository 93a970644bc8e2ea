//! Template persistence
//!
//! Templates are JSON objects stored one file per method under
//! `<root>/templates/`, named after the endpoint (`users.get.json`).
//! Reads go through an in-memory cache so repeated validation of the
//! same method does not touch the disk; writes and removals keep the
//! cache coherent with the files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::api::Method;

use super::errors::{TemplateError, TemplateResult};

/// Directory under the store root that holds template files.
pub const TEMPLATE_DIR: &str = "templates";

/// Disk-backed template store with a read-through cache.
#[derive(Debug)]
pub struct TemplateStore {
    root: PathBuf,
    cache: Mutex<HashMap<Method, Value>>,
}

impl TemplateStore {
    /// Opens a store rooted at `root`, creating the template directory
    /// if it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> TemplateResult<Self> {
        let root = root.into();
        let dir = root.join(TEMPLATE_DIR);
        fs::create_dir_all(&dir).map_err(|e| TemplateError::io(&dir, e))?;
        Ok(Self {
            root,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// The store root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the template files.
    pub fn template_dir(&self) -> PathBuf {
        self.root.join(TEMPLATE_DIR)
    }

    fn file_path(&self, method: Method) -> PathBuf {
        self.template_dir().join(format!("{}.json", method.endpoint()))
    }

    fn cache_guard(&self) -> MutexGuard<'_, HashMap<Method, Value>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Returns the template for `method`, reading it from disk on the
    /// first access and from the cache afterwards.
    pub fn template(&self, method: Method) -> TemplateResult<Value> {
        if let Some(cached) = self.cache_guard().get(&method) {
            return Ok(cached.clone());
        }

        let path = self.file_path(method);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TemplateError::NotFound(method.endpoint().to_string()));
            }
            Err(e) => return Err(TemplateError::io(&path, e)),
        };

        let value: Value = serde_json::from_str(&raw).map_err(|e| TemplateError::Malformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(TemplateError::Malformed {
                path,
                reason: "template root must be a JSON object".into(),
            });
        }

        self.cache_guard().insert(method, value.clone());
        Ok(value)
    }

    /// Stores `template` for `method`, replacing any previous one.
    pub fn put(&self, method: Method, template: Value) -> TemplateResult<()> {
        if !template.is_object() {
            return Err(TemplateError::Malformed {
                path: self.file_path(method),
                reason: "template root must be a JSON object".into(),
            });
        }

        let path = self.file_path(method);
        let pretty = serde_json::to_string_pretty(&template).map_err(|e| {
            TemplateError::Malformed {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&path, pretty).map_err(|e| TemplateError::io(&path, e))?;

        self.cache_guard().insert(method, template);
        Ok(())
    }

    /// Removes the template for `method`. Errors with `NotFound` when
    /// no template is stored.
    pub fn remove(&self, method: Method) -> TemplateResult<()> {
        let path = self.file_path(method);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TemplateError::NotFound(method.endpoint().to_string()));
            }
            Err(e) => return Err(TemplateError::io(&path, e)),
        }
        self.cache_guard().remove(&method);
        Ok(())
    }

    /// Removes every stored template and clears the cache.
    pub fn remove_all(&self) -> TemplateResult<()> {
        let dir = self.template_dir();
        let entries = fs::read_dir(&dir).map_err(|e| TemplateError::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| TemplateError::io(&dir, e))?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).map_err(|e| TemplateError::io(&path, e))?;
            }
        }
        self.cache_guard().clear();
        Ok(())
    }

    /// Moves the template directory to a new root and re-points the
    /// store at it. The cache is kept since the contents are unchanged.
    pub fn relocate(&mut self, new_root: impl Into<PathBuf>) -> TemplateResult<()> {
        let new_root = new_root.into();
        fs::create_dir_all(&new_root).map_err(|e| TemplateError::io(&new_root, e))?;

        let old_dir = self.template_dir();
        let new_dir = new_root.join(TEMPLATE_DIR);
        fs::rename(&old_dir, &new_dir).map_err(|e| TemplateError::io(&old_dir, e))?;

        self.root = new_root;
        Ok(())
    }

    /// Endpoints that currently have a template on disk, sorted.
    pub fn list(&self) -> TemplateResult<Vec<String>> {
        let dir = self.template_dir();
        let entries = fs::read_dir(&dir).map_err(|e| TemplateError::io(&dir, e))?;

        let mut endpoints = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TemplateError::io(&dir, e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(endpoint) = name.strip_suffix(".json") {
                endpoints.push(endpoint.to_string());
            }
        }
        endpoints.sort();
        Ok(endpoints)
    }
}

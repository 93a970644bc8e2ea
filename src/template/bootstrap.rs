//! Default-template bootstrap
//!
//! A fresh installation ships with a tar archive of default templates.
//! On first use the archive is unpacked into the store's template
//! directory. The unpack is guarded: a store that already holds any
//! template is left untouched, so user-supplied templates are never
//! overwritten by defaults.

use std::fs::File;
use std::path::Path;

use tar::{Archive, Builder};

use super::errors::{TemplateError, TemplateResult};
use super::store::TemplateStore;

/// Unpacks `archive` into the store's template directory unless the
/// store already holds templates. Returns the number of template files
/// written, 0 when the guard skipped the unpack.
pub fn bootstrap_from_archive(store: &TemplateStore, archive: &Path) -> TemplateResult<usize> {
    if !store.list()?.is_empty() {
        return Ok(0);
    }

    let file = File::open(archive).map_err(|e| TemplateError::io(archive, e))?;
    let mut tar = Archive::new(file);
    let entries = tar
        .entries()
        .map_err(|e| TemplateError::Bootstrap(format!("cannot read archive: {}", e)))?;

    let dir = store.template_dir();
    let mut written = 0;
    for entry in entries {
        let mut entry =
            entry.map_err(|e| TemplateError::Bootstrap(format!("corrupt archive entry: {}", e)))?;
        let path = entry
            .path()
            .map_err(|e| TemplateError::Bootstrap(format!("bad entry path: {}", e)))?
            .into_owned();

        // Entries are unpacked flat by file name, which also keeps
        // archive-supplied paths from escaping the template directory.
        let name = match path.file_name() {
            Some(name) if path.extension().is_some_and(|ext| ext == "json") => name.to_owned(),
            _ => continue,
        };

        let dest = dir.join(name);
        entry
            .unpack(&dest)
            .map_err(|e| TemplateError::io(&dest, e))?;
        written += 1;
    }

    Ok(written)
}

/// Packs every stored template into a tar archive at `dest`. Entries
/// are added in sorted order so identical stores produce identical
/// archives. Returns the number of templates packed.
pub fn pack_templates(store: &TemplateStore, dest: &Path) -> TemplateResult<usize> {
    let endpoints = store.list()?;
    let dir = store.template_dir();

    let file = File::create(dest).map_err(|e| TemplateError::io(dest, e))?;
    let mut builder = Builder::new(file);

    for endpoint in &endpoints {
        let name = format!("{}.json", endpoint);
        let path = dir.join(&name);
        let mut source = File::open(&path).map_err(|e| TemplateError::io(&path, e))?;
        builder
            .append_file(&name, &mut source)
            .map_err(|e| TemplateError::io(&path, e))?;
    }

    builder
        .finish()
        .map_err(|e| TemplateError::Bootstrap(format!("cannot finish archive: {}", e)))?;
    Ok(endpoints.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use serde_json::json;
    use tempfile::TempDir;

    fn archive_with_defaults(dir: &Path) -> std::path::PathBuf {
        let source_root = dir.join("source");
        let source = TemplateStore::open(&source_root).unwrap();
        source.put(Method::UsersGet, json!({"response": []})).unwrap();
        source
            .put(Method::WallGet, json!({"response": {"count": 0}}))
            .unwrap();

        let archive = dir.join("default-templates.tar");
        assert_eq!(pack_templates(&source, &archive).unwrap(), 2);
        archive
    }

    #[test]
    fn test_bootstrap_populates_empty_store() {
        let dir = TempDir::new().unwrap();
        let archive = archive_with_defaults(dir.path());

        let store = TemplateStore::open(dir.path().join("store")).unwrap();
        assert_eq!(bootstrap_from_archive(&store, &archive).unwrap(), 2);
        assert_eq!(store.list().unwrap(), vec!["users.get", "wall.get"]);
        assert!(store.template(Method::UsersGet).is_ok());
    }

    #[test]
    fn test_bootstrap_skips_populated_store() {
        let dir = TempDir::new().unwrap();
        let archive = archive_with_defaults(dir.path());

        let store = TemplateStore::open(dir.path().join("store")).unwrap();
        let existing = json!({"response": {"kept": true}});
        store.put(Method::WallGet, existing.clone()).unwrap();

        assert_eq!(bootstrap_from_archive(&store, &archive).unwrap(), 0);
        assert_eq!(store.template(Method::WallGet).unwrap(), existing);
        assert_eq!(store.list().unwrap(), vec!["wall.get"]);
    }

    #[test]
    fn test_bootstrap_missing_archive_errors() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::open(dir.path()).unwrap();

        assert!(bootstrap_from_archive(&store, &dir.path().join("absent.tar")).is_err());
    }

    #[test]
    fn test_non_json_entries_are_skipped() {
        let dir = TempDir::new().unwrap();

        let archive_path = dir.path().join("mixed.tar");
        let file = File::create(&archive_path).unwrap();
        let mut builder = Builder::new(file);
        let mut header = tar::Header::new_gnu();
        header.set_size(9);
        header.set_cksum();
        builder
            .append_data(&mut header, "readme.txt", "ignore me".as_bytes())
            .unwrap();
        let body = br#"{"a": 1}"#;
        let mut header = tar::Header::new_gnu();
        header.set_size(body.len() as u64);
        header.set_cksum();
        builder
            .append_data(&mut header, "auth.logout.json", body.as_slice())
            .unwrap();
        builder.finish().unwrap();

        let store = TemplateStore::open(dir.path().join("store")).unwrap();
        assert_eq!(bootstrap_from_archive(&store, &archive_path).unwrap(), 1);
        assert_eq!(store.list().unwrap(), vec!["auth.logout"]);
    }
}

//! Project files (`.wdp`)
//!
//! A project is stored as a versioned JSON document holding the whole `Page`:
//! settings, global styles, the id counter, the selection and every element
//! with its content and style overrides. Loading it back yields a page equal
//! to the one saved.
//!
//! Older builds wrote a plain-text dump with one `Element: <type>, Content:
//! <content>` line per element. That format drops styles and cannot be
//! reconstructed; it can still be written for compatibility, and is
//! recognised and refused on open.

use crate::export::ensure_extension;
use crate::store::Page;
use crate::{Error, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_EXTENSION: &str = "wdp";
pub const FORMAT_NAME: &str = "pagecraft-project";
pub const FORMAT_VERSION: u32 = 1;
pub const LEGACY_HEADER: &str = "Web Design Project File";

#[derive(Serialize, Deserialize)]
struct ProjectFile {
    format: String,
    version: u32,
    page: Page,
}

pub fn to_json(page: &Page) -> Result<String> {
    let file = ProjectFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        page: page.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

pub fn from_json(text: &str) -> Result<Page> {
    if is_legacy(text) {
        return Err(Error::UnsupportedFormat(
            "legacy text project; it stores no styles and cannot be reopened".into(),
        ));
    }

    let file: ProjectFile = serde_json::from_str(text)?;
    if file.format != FORMAT_NAME {
        return Err(Error::UnsupportedFormat(format!(
            "unknown format {:?}",
            file.format
        )));
    }
    if file.version > FORMAT_VERSION {
        return Err(Error::UnsupportedFormat(format!(
            "version {} is newer than supported version {}",
            file.version, FORMAT_VERSION
        )));
    }
    file.page.check_consistency()?;
    Ok(file.page)
}

pub fn is_legacy(text: &str) -> bool {
    text.lines().next().map(str::trim) == Some(LEGACY_HEADER)
}

/// Save `page`, appending `.wdp` when the path has no extension
pub fn save(page: &Page, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = ensure_extension(path.as_ref(), PROJECT_EXTENSION);
    let json = to_json(page)?;
    fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
    info!("saved project with {} element(s) to {}", page.len(), path.display());
    Ok(path)
}

pub fn open(path: impl AsRef<Path>) -> Result<Page> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let page = from_json(&text)?;
    debug!("opened project {} ({} element(s))", path.display(), page.len());
    Ok(page)
}

/// The lossy one-line-per-element dump written by older builds
pub fn to_legacy_text(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", LEGACY_HEADER);
    for el in page.list_elements() {
        let _ = writeln!(out, "Element: {}, Content: {}", el.kind(), el.content());
    }
    out
}

pub fn save_legacy(page: &Page, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = ensure_extension(path.as_ref(), PROJECT_EXTENSION);
    fs::write(&path, to_legacy_text(page)).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

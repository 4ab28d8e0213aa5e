//! Writing rendered pages to disk: export and browser preview

use crate::rendering::{render_with, RenderOptions};
use crate::store::Page;
use crate::{Error, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const HTML_EXTENSION: &str = "html";

/// Append `ext` to `path` when it has no extension of its own
pub fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}

/// Render `page` and write it to `path` (`.html` is added if missing).
/// Returns the path actually written.
pub fn export_html(page: &Page, path: impl AsRef<Path>, opts: &RenderOptions) -> Result<PathBuf> {
    let path = ensure_extension(path.as_ref(), HTML_EXTENSION);
    let html = render_with(page, opts);
    fs::write(&path, html).map_err(|e| Error::io(&path, e))?;
    info!("exported {} element(s) to {}", page.len(), path.display());
    Ok(path)
}

/// Render `page` into `dir/file_name` for previewing and return the
/// absolute path of the written file.
pub fn write_preview(
    page: &Page,
    dir: impl AsRef<Path>,
    file_name: &str,
    opts: &RenderOptions,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let path = dir.join(file_name);
    fs::write(&path, render_with(page, opts)).map_err(|e| Error::io(&path, e))?;
    let path = path.canonicalize().map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

/// Write the preview file and hand it to the platform's default opener
#[cfg(feature = "preview")]
pub fn preview(
    page: &Page,
    dir: impl AsRef<Path>,
    file_name: &str,
    opts: &RenderOptions,
) -> Result<PathBuf> {
    let path = write_preview(page, dir, file_name, opts)?;
    open::that(&path).map_err(|e| Error::PreviewError(format!("{}: {}", path.display(), e)))?;
    info!("opened preview {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn extension_is_added_only_when_missing() {
        assert_eq!(
            ensure_extension(Path::new("site/index"), "html"),
            PathBuf::from("site/index.html")
        );
        assert_eq!(
            ensure_extension(Path::new("site/index.htm"), "html"),
            PathBuf::from("site/index.htm")
        );
    }

    #[test]
    fn export_to_missing_directory_fails_without_touching_page() {
        let mut page = Page::new();
        page.add_element(ElementKind::Header);
        let before = page.clone();
        let dir = tempfile::tempdir().unwrap();
        let err = export_html(
            &page,
            dir.path().join("missing").join("out"),
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(page, before);
    }
}

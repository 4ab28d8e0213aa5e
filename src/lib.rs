//! Pagecraft
//!
//! The model and HTML exporter behind a drag-and-place page builder. A page
//! is an ordered list of typed elements (header, paragraph, button, image,
//! divider, form), each with text content and a small set of style
//! overrides, plus document-wide background colour and font family. The
//! renderer turns a page into a standalone HTML document.
//!
//! # Features
//!
//! - **actor** (default): `PageHandle`, a worker-owned page for async callers
//! - **preview** (default): open rendered previews with the platform's
//!   default browser
//!
//! # Example
//!
//! ```
//! use pagecraft::{ElementKind, Page, StyleKey, StylePatch};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = Page::new();
//! let header = page.add_element(ElementKind::Header).id();
//! page.update_content(header, "Hello")?;
//! page.update_styles(header, &StylePatch::new().with(StyleKey::FontSize, 24))?;
//!
//! let html = pagecraft::render(&page);
//! assert!(html.contains(">Hello</h1>"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod edit;
pub mod element;
pub mod export;
pub mod project;
pub mod rendering;
pub mod session;
pub mod status;
pub mod store;
pub mod style;

// Worker-thread page owner for multi-threaded runtimes
#[cfg(feature = "actor")]
pub mod actor;

#[cfg(feature = "actor")]
pub use actor::PageHandle;

pub use edit::PropertyEdit;
pub use element::{ElementId, ElementKind, PageElement};
pub use rendering::{fingerprint, render, render_with, RenderOptions};
pub use session::Session;
pub use store::{GlobalStyles, GlobalStylesPatch, Page};
pub use style::{ElementStyle, StyleKey, StyleMap, StylePatch, StyleValue};

/// Process-wide designer settings
///
/// New pages copy `accent_color`, `title` and `global_styles` when they are
/// created; the remaining fields control export and the status line.
///
/// # Examples
///
/// ```
/// let cfg = pagecraft::DesignerConfig::default();
/// assert_eq!(cfg.accent_color, "#3498db");
/// ```
#[derive(Debug, Clone)]
pub struct DesignerConfig {
    /// Accent colour used for buttons that have no background override
    pub accent_color: String,
    /// Document `<title>`
    pub title: String,
    /// Global styles for new pages
    pub global_styles: GlobalStyles,
    /// Renderer settings for export and preview
    pub render: RenderOptions,
    /// File name the preview is written to
    pub preview_file_name: String,
    /// How long a status message stays up, in milliseconds
    pub status_revert_ms: u64,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            accent_color: "#3498db".to_string(),
            title: "My Web Design".to_string(),
            global_styles: GlobalStyles::default(),
            render: RenderOptions::default(),
            preview_file_name: "preview.html".to_string(),
            status_revert_ms: 3000,
        }
    }
}

//! HTML rendering
//!
//! `render` turns a `Page` into a complete, standalone HTML document. It only
//! reads the page, so calling it twice on an unchanged page yields the same
//! bytes. The document is assembled from three parts: a fixed header whose
//! `<style>` block carries the page's global styles, one fragment per element
//! in page order, and a fixed footer.

pub mod document;
pub mod fragment;

use crate::store::Page;
use sha2::{Digest, Sha256};

/// Knobs for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape element content and style values before inserting them into
    /// markup. Disabling this inserts user text verbatim, matching the
    /// output of older exports.
    pub escape_content: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_content: true,
        }
    }
}

/// Render with default options
pub fn render(page: &Page) -> String {
    render_with(page, &RenderOptions::default())
}

pub fn render_with(page: &Page, opts: &RenderOptions) -> String {
    let mut out = String::with_capacity(2048 + page.len() * 128);
    document::write_header(&mut out, page, opts);
    for element in page.list_elements() {
        fragment::write_element(&mut out, element, page.accent_color(), opts);
    }
    document::write_footer(&mut out);
    out
}

/// SHA-256 hex digest of the rendered document
pub fn fingerprint(page: &Page) -> String {
    fingerprint_with(page, &RenderOptions::default())
}

pub fn fingerprint_with(page: &Page, opts: &RenderOptions) -> String {
    let html = render_with(page, opts);
    hex::encode(Sha256::digest(html.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::style::{StyleKey, StylePatch};

    #[test]
    fn empty_page_is_header_and_footer_only() {
        let page = Page::new();
        let html = render(&page);
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(html.contains("<title>My Web Design</title>"));
        assert!(html.ends_with("<div class=\"container\">\n</div>\n</body>\n</html>\n"));
    }

    #[test]
    fn render_is_idempotent() {
        let mut page = Page::new();
        for kind in ElementKind::ALL {
            page.add_element(kind);
        }
        assert_eq!(render(&page), render(&page));
        assert_eq!(fingerprint(&page), fingerprint(&page));
        assert_eq!(fingerprint(&page).len(), 64);
    }

    #[test]
    fn fingerprint_tracks_content_changes() {
        let mut page = Page::new();
        let id = page.add_element(ElementKind::Header).id();
        let before = fingerprint(&page);
        page.update_styles(id, &StylePatch::new().with(StyleKey::FontSize, 30))
            .unwrap();
        assert_ne!(before, fingerprint(&page));
    }

    #[test]
    fn elements_render_in_page_order() {
        let mut page = Page::new();
        page.add_element(ElementKind::Button);
        page.add_element(ElementKind::Header);
        let html = render(&page);
        let button = html.find("<button style=").unwrap();
        let h1 = html.find("<h1 style=").unwrap();
        assert!(button < h1);
    }

    const DEFAULT_DOCUMENT: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>My Web Design</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #ffffff;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
        }
        h1 {
            color: #333333;
            font-size: 18px;
            font-weight: bold;
        }
        p {
            color: #333333;
            font-size: 12px;
            line-height: 1.5;
        }
        button {
            background-color: #3498db;
            color: white;
            padding: 10px 15px;
            border: none;
            cursor: pointer;
            font-size: 12px;
            font-weight: bold;
        }
        .image-placeholder {
            width: 150px;
            height: 100px;
            background-color: #f0f0f0;
            display: flex;
            justify-content: center;
            align-items: center;
            border: 1px dashed #ccc;
            color: #7f8c8d;
            font-size: 12px;
        }
        .divider {
            height: 2px;
            background-color: #cccccc;
            margin: 20px 0;
        }
        .form-container {
            padding: 20px;
            border: 1px solid #eee;
            background-color: #f9f9f9;
        }
        .form-container input[type="text"],
        .form-container input[type="email"],
        .form-container textarea {
            width: calc(100% - 20px);
            padding: 8px;
            margin-bottom: 10px;
            border: 1px solid #ddd;
        }
        .form-container button {
            width: auto;
            padding: 8px 20px;
        }
    </style>
</head>
<body>
<div class="container">
<h1 style="font-size:18px; font-weight:bold; color:#333333;">Hello</h1>
<p style="font-size:12px; color:#333333; line-height:1.5;">Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>
<button style="background-color:#3498db; color:white; font-size:12px; font-weight:bold;">Click Me</button>
<div class="image-placeholder">placeholder.png</div>
<div class="divider"></div>
<div class="form-container">
    <h2>Contact Form</h2>
    <form>
        <label for="name">Name:</label><br>
        <input type="text" id="name" name="name"><br>
        <label for="email">Email:</label><br>
        <input type="email" id="email" name="email"><br>
        <label for="message">Message:</label><br>
        <textarea id="message" name="message" rows="5"></textarea><br>
        <button type="submit">Submit</button>
    </form>
</div>
</div>
</body>
</html>
"##;

    #[test]
    fn default_page_renders_exact_document() {
        let mut page = Page::new();
        for kind in ElementKind::ALL {
            page.add_element(kind);
        }
        let first = page.list_elements()[0].id();
        page.update_content(first, "Hello").unwrap();
        assert_eq!(render(&page), DEFAULT_DOCUMENT);
    }
}

//! Fixed document boilerplate around the element fragments

use super::fragment::escape_html;
use super::RenderOptions;
use crate::store::Page;
use std::borrow::Cow;
use std::fmt::Write;

/// Structural rules that do not depend on page content. The button rule is
/// the only one that varies: it picks up the page accent colour.
const STRUCTURAL_CSS: &str = r#"        .container {
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
"#;

const WIDGET_CSS: &str = r#"            color: white;
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
"#;

/// Values placed inside the `<style>` element cannot be entity-escaped, so
/// characters that could close the rule or the element are dropped instead.
fn css_value<'a>(value: &'a str, opts: &RenderOptions) -> Cow<'a, str> {
    if !opts.escape_content || !value.contains(['<', '>', '{', '}']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(value.chars().filter(|c| !"<>{}".contains(*c)).collect())
}

pub fn write_header(out: &mut String, page: &Page, opts: &RenderOptions) {
    let globals = page.global_styles();
    let title: Cow<'_, str> = if opts.escape_content {
        escape_html(&page.settings().title)
    } else {
        Cow::Borrowed(page.settings().title.as_str())
    };

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(out, "    <title>{}</title>", title);
    out.push_str("    <style>\n");
    out.push_str("        body {\n");
    let _ = writeln!(
        out,
        "            font-family: {}, sans-serif;",
        css_value(&globals.font_family, opts)
    );
    out.push_str("            margin: 0;\n            padding: 20px;\n");
    let _ = writeln!(
        out,
        "            background-color: {};",
        css_value(&globals.background_color, opts)
    );
    out.push_str("        }\n");
    out.push_str(STRUCTURAL_CSS);
    out.push_str("        button {\n");
    let _ = writeln!(
        out,
        "            background-color: {};",
        css_value(page.accent_color(), opts)
    );
    out.push_str(WIDGET_CSS);
    out.push_str("    </style>\n</head>\n<body>\n<div class=\"container\">\n");
}

pub fn write_footer(out: &mut String) {
    out.push_str("</div>\n</body>\n</html>\n");
}

//! Per-element HTML fragments

use super::RenderOptions;
use crate::element::PageElement;
use crate::style::{BoxStyle, ElementStyle};
use std::borrow::Cow;
use std::fmt::Write;

/// The form renders the same block whatever its content or styles
pub const FORM_BLOCK: &str = r#"<div class="form-container">
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
"#;

pub const DIVIDER_BLOCK: &str = "<div class=\"divider\"></div>\n";

/// Escape text for use in element content or a double-quoted attribute
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;"),
    )
}

fn text<'a>(s: &'a str, opts: &RenderOptions) -> Cow<'a, str> {
    if opts.escape_content {
        escape_html(s)
    } else {
        Cow::Borrowed(s)
    }
}

/// Inline declarations in insertion order: `prop:value; prop:value;`
struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
    fn new() -> Self {
        Declarations(Vec::new())
    }

    fn push(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        self.0.push((property, value.into()));
        self
    }

    /// Box overrides are only emitted when set, so untouched elements keep
    /// the plain three/four-property form.
    fn push_box(&mut self, b: &BoxStyle) -> &mut Self {
        if let Some(p) = b.padding {
            self.push("padding", format!("{}px", p));
        }
        if let Some(m) = b.margin {
            self.push("margin", format!("{}px", m));
        }
        if let Some(r) = b.border_radius {
            self.push("border-radius", format!("{}px", r));
        }
        self
    }

    fn to_attr(&self, opts: &RenderOptions) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}:{};", k, text(v, opts)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn write_element(out: &mut String, element: &PageElement, accent: &str, opts: &RenderOptions) {
    let content = text(element.content(), opts);
    match element.styles() {
        ElementStyle::Header(s) => {
            let mut d = Declarations::new();
            d.push("font-size", format!("{}px", s.font_size()))
                .push("font-weight", s.font_weight())
                .push("color", s.color());
            if let Some(align) = &s.alignment {
                d.push("text-align", align.as_str());
            }
            d.push_box(&s.box_model);
            let _ = writeln!(out, "<h1 style=\"{}\">{}</h1>", d.to_attr(opts), content);
        }
        ElementStyle::Paragraph(s) => {
            let mut d = Declarations::new();
            d.push("font-size", format!("{}px", s.font_size()))
                .push("color", s.color())
                .push("line-height", s.line_height())
                .push_box(&s.box_model);
            let _ = writeln!(out, "<p style=\"{}\">{}</p>", d.to_attr(opts), content);
        }
        ElementStyle::Button(s) => {
            let mut d = Declarations::new();
            d.push("background-color", s.background_color(accent))
                .push("color", s.color())
                .push("font-size", format!("{}px", s.font_size()))
                .push("font-weight", s.font_weight())
                .push_box(&s.box_model);
            let _ = writeln!(out, "<button style=\"{}\">{}</button>", d.to_attr(opts), content);
        }
        // image, divider and form markup is fixed; their overrides are kept
        // in the model but do not reach the export yet
        ElementStyle::Image(_) => {
            let _ = writeln!(out, "<div class=\"image-placeholder\">{}</div>", content);
        }
        ElementStyle::Divider(_) => out.push_str(DIVIDER_BLOCK),
        ElementStyle::Form(_) => out.push_str(FORM_BLOCK),
    }
}

//! Page elements: identity, type and content

use crate::style::{ElementStyle, StyleKey};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable element identifier, unique within a page and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        ElementId(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ElementId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(ElementId)
            .map_err(|_| Error::validation("id", format!("expected an element id, got {:?}", s)))
    }
}

/// The closed set of element types offered by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Header,
    Paragraph,
    Button,
    Image,
    Divider,
    Form,
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Header,
        ElementKind::Paragraph,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Divider,
        ElementKind::Form,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Header => "header",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Divider => "divider",
            ElementKind::Form => "form",
        }
    }

    /// Capitalized name used in status messages ("Header added.")
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Header => "Header",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Button => "Button",
            ElementKind::Image => "Image",
            ElementKind::Divider => "Divider",
            ElementKind::Form => "Form",
        }
    }

    /// Content a freshly added element starts with
    pub fn default_content(self) -> &'static str {
        match self {
            ElementKind::Header => "New Header",
            ElementKind::Paragraph => "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            ElementKind::Button => "Click Me",
            ElementKind::Image => "placeholder.png",
            ElementKind::Divider => "",
            ElementKind::Form => "Contact Form",
        }
    }

    /// Style keys an element of this type accepts
    pub fn style_keys(self) -> &'static [StyleKey] {
        use StyleKey::*;
        match self {
            ElementKind::Header => &[
                FontSize,
                FontWeight,
                Color,
                Alignment,
                Padding,
                Margin,
                BorderRadius,
            ],
            ElementKind::Paragraph => &[FontSize, Color, LineHeight, Padding, Margin, BorderRadius],
            ElementKind::Button => &[
                BackgroundColor,
                Color,
                FontSize,
                FontWeight,
                Padding,
                Margin,
                BorderRadius,
            ],
            ElementKind::Image => &[Width, Height],
            ElementKind::Divider => &[Height, Color],
            ElementKind::Form => &[],
        }
    }

    pub fn supports(self, key: StyleKey) -> bool {
        self.style_keys().contains(&key)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ElementKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::validation("type", format!("unknown element type {:?}", s)))
    }
}

/// One content block on the page
///
/// Fields are private: the `Page` is the only place elements are mutated, so
/// `id` and type stay fixed for the lifetime of the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElement {
    id: ElementId,
    #[serde(default)]
    content: String,
    styles: ElementStyle,
}

impl PageElement {
    pub(crate) fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            content: kind.default_content().to_string(),
            styles: ElementStyle::empty(kind),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.styles.kind()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Stored style overrides (not the effective values)
    pub fn styles(&self) -> &ElementStyle {
        &self.styles
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub(crate) fn styles_mut(&mut self) -> &mut ElementStyle {
        &mut self.styles
    }
}

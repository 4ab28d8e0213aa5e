//! Typed style overrides
//!
//! Each element type carries its own record of optional fields. A `None`
//! field means "use the type default"; defaults are resolved when styles are
//! read or rendered and are never written into storage. Edits arrive as raw
//! text from the properties panel (`StylePatch`) and are validated against
//! the element type before anything is merged.

use crate::element::ElementKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Style property names understood by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    FontSize,
    FontWeight,
    Color,
    BackgroundColor,
    LineHeight,
    Width,
    Height,
    Padding,
    Margin,
    BorderRadius,
    Alignment,
}

impl StyleKey {
    pub const ALL: [StyleKey; 11] = [
        StyleKey::FontSize,
        StyleKey::FontWeight,
        StyleKey::Color,
        StyleKey::BackgroundColor,
        StyleKey::LineHeight,
        StyleKey::Width,
        StyleKey::Height,
        StyleKey::Padding,
        StyleKey::Margin,
        StyleKey::BorderRadius,
        StyleKey::Alignment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::FontSize => "font_size",
            StyleKey::FontWeight => "font_weight",
            StyleKey::Color => "color",
            StyleKey::BackgroundColor => "background_color",
            StyleKey::LineHeight => "line_height",
            StyleKey::Width => "width",
            StyleKey::Height => "height",
            StyleKey::Padding => "padding",
            StyleKey::Margin => "margin",
            StyleKey::BorderRadius => "border_radius",
            StyleKey::Alignment => "alignment",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        StyleKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s || k.as_str().replace('_', "-") == s)
            .ok_or_else(|| Error::validation(s, "unknown style property"))
    }
}

/// A resolved style value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Int(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Int(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

/// Key/value view of styles, ordered by key
pub type StyleMap = BTreeMap<StyleKey, StyleValue>;

/// Raw, uncommitted style edits keyed by property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    values: BTreeMap<StyleKey, String>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, key: StyleKey, value: impl fmt::Display) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: StyleKey, value: impl fmt::Display) {
        self.values.insert(key, value.to_string());
    }

    /// Parse a `key=value` assignment as typed on the command line
    pub fn parse_assignment(s: &str) -> Result<(StyleKey, String)> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| Error::validation(s, "expected KEY=VALUE"))?;
        Ok((key.parse()?, value.to_string()))
    }

    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(StyleKey, String)> for StylePatch {
    fn from_iter<I: IntoIterator<Item = (StyleKey, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn parse_unsigned(key: StyleKey, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        Error::validation(
            key.as_str(),
            format!("expected a non-negative integer, got {:?}", raw),
        )
    })
}

fn parse_signed(key: StyleKey, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| Error::validation(key.as_str(), format!("expected an integer, got {:?}", raw)))
}

/// Per-record access used by `ElementStyle` dispatch
trait StyleRecord {
    fn get(&self, key: StyleKey) -> Option<StyleValue>;
    /// `key` has already been checked against the element type
    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()>;
}

/// Box-model overrides shared by the text-bearing elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

impl StyleRecord for BoxStyle {
    fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::Padding => self.padding.map(|n| StyleValue::Int(n.into())),
            StyleKey::Margin => self.margin.map(|n| StyleValue::Int(n.into())),
            StyleKey::BorderRadius => self.border_radius.map(|n| StyleValue::Int(n.into())),
            _ => None,
        }
    }

    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        match key {
            StyleKey::Padding => self.padding = Some(parse_unsigned(key, raw)?),
            StyleKey::Margin => self.margin = Some(parse_signed(key, raw)?),
            StyleKey::BorderRadius => self.border_radius = Some(parse_unsigned(key, raw)?),
            _ => return Err(Error::validation(key.as_str(), "not a box property")),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(flatten)]
    pub box_model: BoxStyle,
}

impl HeaderStyle {
    pub const DEFAULT_FONT_SIZE: u32 = 18;
    pub const DEFAULT_FONT_WEIGHT: &'static str = "bold";
    pub const DEFAULT_COLOR: &'static str = "#333333";
    pub const DEFAULT_ALIGNMENT: &'static str = "left";

    pub fn font_size(&self) -> u32 {
        self.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE)
    }

    pub fn font_weight(&self) -> &str {
        self.font_weight.as_deref().unwrap_or(Self::DEFAULT_FONT_WEIGHT)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(Self::DEFAULT_COLOR)
    }

    pub fn alignment(&self) -> &str {
        self.alignment.as_deref().unwrap_or(Self::DEFAULT_ALIGNMENT)
    }
}

impl StyleRecord for HeaderStyle {
    fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::FontSize => self.font_size.map(|n| StyleValue::Int(n.into())),
            StyleKey::FontWeight => self.font_weight.as_deref().map(StyleValue::from),
            StyleKey::Color => self.color.as_deref().map(StyleValue::from),
            StyleKey::Alignment => self.alignment.as_deref().map(StyleValue::from),
            _ => self.box_model.get(key),
        }
    }

    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        match key {
            StyleKey::FontSize => self.font_size = Some(parse_unsigned(key, raw)?),
            StyleKey::FontWeight => self.font_weight = Some(raw.to_string()),
            StyleKey::Color => self.color = Some(raw.to_string()),
            StyleKey::Alignment => self.alignment = Some(raw.to_string()),
            _ => self.box_model.assign(key, raw)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(flatten)]
    pub box_model: BoxStyle,
}

impl ParagraphStyle {
    pub const DEFAULT_FONT_SIZE: u32 = 12;
    pub const DEFAULT_COLOR: &'static str = "#333333";
    pub const DEFAULT_LINE_HEIGHT: &'static str = "1.5";

    pub fn font_size(&self) -> u32 {
        self.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(Self::DEFAULT_COLOR)
    }

    pub fn line_height(&self) -> &str {
        self.line_height.as_deref().unwrap_or(Self::DEFAULT_LINE_HEIGHT)
    }
}

impl StyleRecord for ParagraphStyle {
    fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::FontSize => self.font_size.map(|n| StyleValue::Int(n.into())),
            StyleKey::Color => self.color.as_deref().map(StyleValue::from),
            StyleKey::LineHeight => self.line_height.as_deref().map(StyleValue::from),
            _ => self.box_model.get(key),
        }
    }

    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        match key {
            StyleKey::FontSize => self.font_size = Some(parse_unsigned(key, raw)?),
            StyleKey::Color => self.color = Some(raw.to_string()),
            StyleKey::LineHeight => self.line_height = Some(raw.to_string()),
            _ => self.box_model.assign(key, raw)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    /// `None` renders with the page accent colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(flatten)]
    pub box_model: BoxStyle,
}

impl ButtonStyle {
    pub const DEFAULT_COLOR: &'static str = "white";
    pub const DEFAULT_FONT_SIZE: u32 = 12;
    pub const DEFAULT_FONT_WEIGHT: &'static str = "bold";

    pub fn background_color<'a>(&'a self, accent: &'a str) -> &'a str {
        self.background_color.as_deref().unwrap_or(accent)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(Self::DEFAULT_COLOR)
    }

    pub fn font_size(&self) -> u32 {
        self.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE)
    }

    pub fn font_weight(&self) -> &str {
        self.font_weight.as_deref().unwrap_or(Self::DEFAULT_FONT_WEIGHT)
    }
}

impl StyleRecord for ButtonStyle {
    fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::BackgroundColor => self.background_color.as_deref().map(StyleValue::from),
            StyleKey::Color => self.color.as_deref().map(StyleValue::from),
            StyleKey::FontSize => self.font_size.map(|n| StyleValue::Int(n.into())),
            StyleKey::FontWeight => self.font_weight.as_deref().map(StyleValue::from),
            _ => self.box_model.get(key),
        }
    }

    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        match key {
            StyleKey::BackgroundColor => self.background_color = Some(raw.to_string()),
            StyleKey::Color => self.color = Some(raw.to_string()),
            StyleKey::FontSize => self.font_size = Some(parse_unsigned(key, raw)?),
            StyleKey::FontWeight => self.font_weight = Some(raw.to_string()),
            _ => self.box_model.assign(key, raw)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl ImageStyle {
    pub const DEFAULT_SIZE: &'static str = "auto";
}

impl StyleRecord for ImageStyle {
    fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::Width => self.width.as_deref().map(StyleValue::from),
            StyleKey::Height => self.height.as_deref().map(StyleValue::from),
            _ => None,
        }
    }

    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        match key {
            StyleKey::Width => self.width = Some(raw.to_string()),
            StyleKey::Height => self.height = Some(raw.to_string()),
            _ => return Err(Error::validation(key.as_str(), "not an image property")),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DividerStyle {
    pub const DEFAULT_HEIGHT: u32 = 2;
    pub const DEFAULT_COLOR: &'static str = "#cccccc";
}

impl StyleRecord for DividerStyle {
    fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::Height => self.height.map(|n| StyleValue::Int(n.into())),
            StyleKey::Color => self.color.as_deref().map(StyleValue::from),
            _ => None,
        }
    }

    fn assign(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        match key {
            StyleKey::Height => self.height = Some(parse_unsigned(key, raw)?),
            StyleKey::Color => self.color = Some(raw.to_string()),
            _ => return Err(Error::validation(key.as_str(), "not a divider property")),
        }
        Ok(())
    }
}

/// The form renders a fixed layout and stores no overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStyle {}

impl StyleRecord for FormStyle {
    fn get(&self, _key: StyleKey) -> Option<StyleValue> {
        None
    }

    fn assign(&mut self, key: StyleKey, _raw: &str) -> Result<()> {
        Err(Error::validation(key.as_str(), "forms have no style properties"))
    }
}

/// Style overrides tagged by element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "overrides", rename_all = "snake_case")]
pub enum ElementStyle {
    Header(HeaderStyle),
    Paragraph(ParagraphStyle),
    Button(ButtonStyle),
    Image(ImageStyle),
    Divider(DividerStyle),
    Form(FormStyle),
}

impl ElementStyle {
    /// A record with no overrides for the given type
    pub fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Header => ElementStyle::Header(HeaderStyle::default()),
            ElementKind::Paragraph => ElementStyle::Paragraph(ParagraphStyle::default()),
            ElementKind::Button => ElementStyle::Button(ButtonStyle::default()),
            ElementKind::Image => ElementStyle::Image(ImageStyle::default()),
            ElementKind::Divider => ElementStyle::Divider(DividerStyle::default()),
            ElementKind::Form => ElementStyle::Form(FormStyle::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementStyle::Header(_) => ElementKind::Header,
            ElementStyle::Paragraph(_) => ElementKind::Paragraph,
            ElementStyle::Button(_) => ElementKind::Button,
            ElementStyle::Image(_) => ElementKind::Image,
            ElementStyle::Divider(_) => ElementKind::Divider,
            ElementStyle::Form(_) => ElementKind::Form,
        }
    }

    fn record(&self) -> &dyn StyleRecord {
        match self {
            ElementStyle::Header(s) => s,
            ElementStyle::Paragraph(s) => s,
            ElementStyle::Button(s) => s,
            ElementStyle::Image(s) => s,
            ElementStyle::Divider(s) => s,
            ElementStyle::Form(s) => s,
        }
    }

    fn record_mut(&mut self) -> &mut dyn StyleRecord {
        match self {
            ElementStyle::Header(s) => s,
            ElementStyle::Paragraph(s) => s,
            ElementStyle::Button(s) => s,
            ElementStyle::Image(s) => s,
            ElementStyle::Divider(s) => s,
            ElementStyle::Form(s) => s,
        }
    }

    /// Stored override for `key`, if any
    pub fn get(&self, key: StyleKey) -> Option<StyleValue> {
        self.record().get(key)
    }

    /// Only the keys that have been explicitly set
    pub fn overrides(&self) -> StyleMap {
        self.kind()
            .style_keys()
            .iter()
            .filter_map(|&k| self.get(k).map(|v| (k, v)))
            .collect()
    }

    /// Type defaults, before any override
    pub fn defaults(kind: ElementKind, accent: &str) -> StyleMap {
        let mut map = StyleMap::new();
        match kind {
            ElementKind::Header => {
                map.insert(StyleKey::FontSize, StyleValue::Int(HeaderStyle::DEFAULT_FONT_SIZE.into()));
                map.insert(StyleKey::FontWeight, HeaderStyle::DEFAULT_FONT_WEIGHT.into());
                map.insert(StyleKey::Color, HeaderStyle::DEFAULT_COLOR.into());
                map.insert(StyleKey::Alignment, HeaderStyle::DEFAULT_ALIGNMENT.into());
            }
            ElementKind::Paragraph => {
                map.insert(StyleKey::FontSize, StyleValue::Int(ParagraphStyle::DEFAULT_FONT_SIZE.into()));
                map.insert(StyleKey::Color, ParagraphStyle::DEFAULT_COLOR.into());
                map.insert(StyleKey::LineHeight, ParagraphStyle::DEFAULT_LINE_HEIGHT.into());
            }
            ElementKind::Button => {
                map.insert(StyleKey::BackgroundColor, accent.into());
                map.insert(StyleKey::Color, ButtonStyle::DEFAULT_COLOR.into());
                map.insert(StyleKey::FontSize, StyleValue::Int(ButtonStyle::DEFAULT_FONT_SIZE.into()));
                map.insert(StyleKey::FontWeight, ButtonStyle::DEFAULT_FONT_WEIGHT.into());
            }
            ElementKind::Image => {
                map.insert(StyleKey::Width, ImageStyle::DEFAULT_SIZE.into());
                map.insert(StyleKey::Height, ImageStyle::DEFAULT_SIZE.into());
            }
            ElementKind::Divider => {
                map.insert(StyleKey::Height, StyleValue::Int(DividerStyle::DEFAULT_HEIGHT.into()));
                map.insert(StyleKey::Color, DividerStyle::DEFAULT_COLOR.into());
            }
            ElementKind::Form => {}
        }
        map
    }

    /// Defaults overlaid with the stored overrides
    pub fn effective(&self, accent: &str) -> StyleMap {
        let mut map = Self::defaults(self.kind(), accent);
        map.extend(self.overrides());
        map
    }

    /// Validate and set a single property
    pub fn set(&mut self, key: StyleKey, raw: &str) -> Result<()> {
        let kind = self.kind();
        if !kind.supports(key) {
            return Err(Error::validation(
                key.as_str(),
                format!("not supported by {} elements", kind),
            ));
        }
        self.record_mut().assign(key, raw)
    }

    /// Merge every value in `patch`, or none of them
    pub fn apply(&mut self, patch: &StylePatch) -> Result<()> {
        let mut next = self.clone();
        for (key, raw) in patch.iter() {
            next.set(key, raw)?;
        }
        *self = next;
        Ok(())
    }
}

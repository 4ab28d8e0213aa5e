//! Property-panel edits
//!
//! The properties panel shows one text field per editable property of the
//! selected element. Values are committed together when the user confirms;
//! if any field fails validation nothing is changed.

use crate::element::{ElementId, PageElement};
use crate::style::{StyleKey, StylePatch};
use crate::store::Page;
use crate::{Error, Result};

/// Uncommitted values for one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyEdit {
    content: Option<String>,
    styles: StylePatch,
}

impl PropertyEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill every field with the element's current (effective) values,
    /// the way the panel opens.
    pub fn from_element(element: &PageElement, accent: &str) -> Self {
        let styles = element
            .styles()
            .effective(accent)
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        Self {
            content: Some(element.content().to_string()),
            styles,
        }
    }

    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content = Some(text.into());
        self
    }

    pub fn style(mut self, key: StyleKey, raw: impl std::fmt::Display) -> Self {
        self.styles.set(key, raw);
        self
    }

    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = Some(text.into());
    }

    pub fn set_style(&mut self, key: StyleKey, raw: impl std::fmt::Display) {
        self.styles.set(key, raw);
    }

    pub fn content_value(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn style_fields(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        self.styles.iter()
    }

    /// Fields whose text differs from the element's effective value. Fields
    /// left at their shown value do not become stored overrides.
    fn changed_styles(&self, page: &Page, id: ElementId) -> Result<StylePatch> {
        let effective = page.effective_styles(id)?;
        Ok(self
            .styles
            .iter()
            .filter(|(k, raw)| effective.get(k).map(|v| v.to_string()).as_deref() != Some(*raw))
            .map(|(k, raw)| (k, raw.to_string()))
            .collect())
    }

    /// Apply styles, then content, to `id`. Nothing changes if any style
    /// field is invalid.
    pub fn commit(&self, page: &mut Page, id: ElementId) -> Result<()> {
        let patch = self.changed_styles(page, id)?;
        // styles first: a rejected patch returns before content is touched
        page.update_styles(id, &patch)?;
        if let Some(content) = &self.content {
            if content != element_content(page, id)? {
                page.update_content(id, content.clone())?;
            }
        }
        Ok(())
    }
}

fn element_content(page: &Page, id: ElementId) -> Result<&str> {
    page.element(id)
        .map(PageElement::content)
        .ok_or(Error::NotFound(id))
}

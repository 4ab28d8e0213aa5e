//! The element store: an ordered page of elements plus selection and
//! document-level styles.

use crate::element::{ElementId, ElementKind, PageElement};
use crate::style::{StyleMap, StylePatch};
use crate::{DesignerConfig, Error, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Document-wide styles applied to `<body>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStyles {
    pub background_color: String,
    pub font_family: String,
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

/// Partial update for `GlobalStyles`; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalStylesPatch {
    pub background_color: Option<String>,
    pub font_family: Option<String>,
}

impl GlobalStylesPatch {
    pub fn background_color(mut self, value: impl Into<String>) -> Self {
        self.background_color = Some(value.into());
        self
    }

    pub fn font_family(mut self, value: impl Into<String>) -> Self {
        self.font_family = Some(value.into());
        self
    }
}

/// Settings captured from `DesignerConfig` when the page is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    pub accent_color: String,
    pub title: String,
}

/// One design being edited
///
/// All mutation goes through the methods below; `list_elements` hands out a
/// read-only view so the canvas can be re-derived from the model at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    settings: PageSettings,
    global_styles: GlobalStyles,
    elements: Vec<PageElement>,
    selected: Option<ElementId>,
    next_id: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// An empty page using the default configuration
    pub fn new() -> Self {
        Self::with_config(&DesignerConfig::default())
    }

    pub fn with_config(config: &DesignerConfig) -> Self {
        Self {
            settings: PageSettings {
                accent_color: config.accent_color.clone(),
                title: config.title.clone(),
            },
            global_styles: config.global_styles.clone(),
            elements: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn accent_color(&self) -> &str {
        &self.settings.accent_color
    }

    pub fn global_styles(&self) -> &GlobalStyles {
        &self.global_styles
    }

    /// Append a new element with the type's default content
    pub fn add_element(&mut self, kind: ElementKind) -> &PageElement {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        self.elements.push(PageElement::new(id, kind));
        debug!("added {} element {}", kind, id);
        &self.elements[self.elements.len() - 1]
    }

    /// Select `id`; unknown ids are ignored
    pub fn select_element(&mut self, id: ElementId) {
        if self.position(id).is_some() {
            self.selected = Some(id);
        } else {
            debug!("ignoring selection of unknown element {}", id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&PageElement> {
        self.selected.and_then(|id| self.element(id))
    }

    /// Remove `id` and return it; a missing id is a no-op
    pub fn delete_element(&mut self, id: ElementId) -> Option<PageElement> {
        let pos = self.position(id)?;
        let removed = self.elements.remove(pos);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("deleted {} element {}", removed.kind(), id);
        Some(removed)
    }

    pub fn delete_selected(&mut self) -> Option<PageElement> {
        let id = self.selected?;
        self.delete_element(id)
    }

    pub fn update_content(&mut self, id: ElementId, content: impl Into<String>) -> Result<()> {
        let element = self.element_mut(id)?;
        element.set_content(content.into());
        debug!("updated content of element {}", id);
        Ok(())
    }

    /// Merge `patch` into the element's overrides; either every key is
    /// applied or the element is left untouched.
    pub fn update_styles(&mut self, id: ElementId, patch: &StylePatch) -> Result<()> {
        let element = self.element_mut(id)?;
        element.styles_mut().apply(patch)?;
        debug!("merged {} style value(s) into element {}", patch.len(), id);
        Ok(())
    }

    pub fn update_global_styles(&mut self, patch: GlobalStylesPatch) {
        if let Some(bg) = patch.background_color {
            self.global_styles.background_color = bg;
        }
        if let Some(font) = patch.font_family {
            self.global_styles.font_family = font;
        }
        info!(
            "global styles: background={}, font={}",
            self.global_styles.background_color, self.global_styles.font_family
        );
    }

    /// Elements in render order
    pub fn list_elements(&self) -> &[PageElement] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Index of `id` in render order
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    pub fn effective_styles(&self, id: ElementId) -> Result<StyleMap> {
        let element = self.element(id).ok_or(Error::NotFound(id))?;
        Ok(element.styles().effective(&self.settings.accent_color))
    }

    /// Drop every element. Ids handed out before stay retired.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected = None;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut PageElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(Error::NotFound(id))
    }

    /// Check invariants of a page reconstructed from disk
    pub(crate) fn check_consistency(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for el in &self.elements {
            if !seen.insert(el.id()) {
                return Err(Error::InconsistentProject(format!(
                    "duplicate element id {}",
                    el.id()
                )));
            }
            if el.id().get() >= self.next_id {
                return Err(Error::InconsistentProject(format!(
                    "element id {} is not below the id counter {}",
                    el.id(),
                    self.next_id
                )));
            }
        }
        if let Some(sel) = self.selected {
            if !seen.contains(&sel) {
                return Err(Error::InconsistentProject(format!(
                    "selection refers to missing element {}",
                    sel
                )));
            }
        }
        Ok(())
    }
}

//! An editing session: the page being designed, the project file it came
//! from and the status line.
//!
//! This is the surface a front-end (the CLI, or a GUI canvas) talks to. Each
//! method performs one user action against the page and leaves a short
//! notice on the status line. Failures are returned to the caller and also
//! noted on the status line; they never leave the page half-modified.

use crate::edit::PropertyEdit;
use crate::element::{ElementId, ElementKind, PageElement};
use crate::export;
use crate::project;
use crate::status::StatusLine;
use crate::store::{GlobalStylesPatch, Page};
use crate::{DesignerConfig, Error, Result};
use log::warn;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub struct Session {
    config: DesignerConfig,
    page: Page,
    project_path: Option<PathBuf>,
    status: StatusLine,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Session {
    pub fn new(config: DesignerConfig) -> Self {
        let page = Page::with_config(&config);
        let status = StatusLine::new(Duration::from_millis(config.status_revert_ms));
        Self {
            config,
            page,
            project_path: None,
            status,
        }
    }

    /// Start a session from an existing project file
    pub fn open(config: DesignerConfig, path: impl AsRef<Path>) -> Result<Self> {
        let mut session = Self::new(config);
        session.open_project(path)?;
        Ok(session)
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.status.show(message, Instant::now());
    }

    fn fail(&mut self, notice: &str, err: Error) -> Error {
        warn!("{}: {}", notice, err);
        self.notify(format!("{}: {}", notice, err));
        err
    }

    pub fn new_project(&mut self) {
        self.page = Page::with_config(&self.config);
        self.project_path = None;
        self.notify("New project created. Start adding elements!");
    }

    pub fn open_project(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match project::open(path) {
            Ok(page) => {
                self.page = page;
                self.project_path = Some(path.to_path_buf());
                self.notify(format!("Project '{}' opened.", file_name(path)));
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to open project", e)),
        }
    }

    /// Save to the current project path
    pub fn save_project(&mut self) -> Result<PathBuf> {
        match self.project_path.clone() {
            Some(path) => self.save_project_as(path),
            None => Err(self.fail(
                "Failed to save project",
                Error::Other("no project file chosen yet".into()),
            )),
        }
    }

    /// Save to `path` and make it the current project path
    pub fn save_project_as(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        match project::save(&self.page, path) {
            Ok(written) => {
                self.notify(format!("Project saved to {}.", file_name(&written)));
                self.project_path = Some(written.clone());
                Ok(written)
            }
            Err(e) => Err(self.fail("Failed to save project", e)),
        }
    }

    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.page.add_element(kind).id();
        self.notify(format!("{} added.", kind.label()));
        id
    }

    pub fn select_element(&mut self, id: ElementId) {
        self.page.select_element(id);
        match self.page.selected() {
            Some(el) if el.id() == id => {
                let label = el.kind().label();
                self.notify(format!("Selected element: {}", label));
            }
            _ => {
                warn!("cannot select element {}: not on the page", id);
                self.notify(format!("Element {} no longer exists", id));
            }
        }
    }

    pub fn selected(&self) -> Option<&PageElement> {
        self.page.selected()
    }

    pub fn delete_element(&mut self, id: ElementId) -> Option<PageElement> {
        let removed = self.page.delete_element(id);
        if let Some(el) = &removed {
            let label = el.kind().label();
            self.notify(format!("{} deleted.", label));
        }
        removed
    }

    pub fn delete_selected(&mut self) -> Option<PageElement> {
        let id = self.page.selected_id()?;
        self.delete_element(id)
    }

    /// Panel for the selected element, pre-filled with its current values
    pub fn edit_selected(&self) -> Option<(ElementId, PropertyEdit)> {
        let el = self.page.selected()?;
        Some((el.id(), PropertyEdit::from_element(el, self.page.accent_color())))
    }

    pub fn commit_edit(&mut self, id: ElementId, edit: &PropertyEdit) -> Result<()> {
        match edit.commit(&mut self.page, id) {
            Ok(()) => {
                self.notify("Properties updated.");
                Ok(())
            }
            Err(e @ Error::NotFound(_)) => Err(self.fail("Element no longer exists", e)),
            Err(e) => Err(self.fail("Invalid input", e)),
        }
    }

    pub fn update_global_styles(&mut self, patch: GlobalStylesPatch) {
        self.page.update_global_styles(patch);
        let globals = self.page.global_styles();
        let msg = format!(
            "Applied global styles: BG={}, Font={}",
            globals.background_color, globals.font_family
        );
        self.notify(msg);
    }

    pub fn export_html(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        match export::export_html(&self.page, path, &self.config.render) {
            Ok(written) => {
                self.notify(format!("HTML exported to {}.", file_name(&written)));
                Ok(written)
            }
            Err(e) => Err(self.fail("Failed to export HTML", e)),
        }
    }

    /// Write the preview file into `dir` without opening it
    pub fn write_preview(&mut self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        match export::write_preview(
            &self.page,
            dir,
            &self.config.preview_file_name,
            &self.config.render,
        ) {
            Ok(path) => {
                self.notify(format!("Preview written to {}.", file_name(&path)));
                Ok(path)
            }
            Err(e) => Err(self.fail("Failed to open preview", e)),
        }
    }

    #[cfg(feature = "preview")]
    pub fn preview(&mut self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        match export::preview(
            &self.page,
            dir,
            &self.config.preview_file_name,
            &self.config.render,
        ) {
            Ok(path) => {
                self.notify("Preview opened in browser.");
                Ok(path)
            }
            Err(e) => Err(self.fail("Failed to open preview", e)),
        }
    }

    /// Direct access for operations that need no notice
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }
}

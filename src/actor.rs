use crate::element::{ElementId, ElementKind, PageElement};
use crate::rendering;
use crate::store::{GlobalStylesPatch, Page};
use crate::style::{StyleMap, StylePatch};
use crate::{Error, Result};
use log::debug;
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Add(ElementKind, oneshot::Sender<PageElement>),
    Select(ElementId, oneshot::Sender<Option<ElementId>>),
    Delete(ElementId, oneshot::Sender<Option<PageElement>>),
    UpdateContent(ElementId, String, oneshot::Sender<Result<()>>),
    UpdateStyles(ElementId, StylePatch, oneshot::Sender<Result<()>>),
    UpdateGlobalStyles(GlobalStylesPatch, oneshot::Sender<()>),
    EffectiveStyles(ElementId, oneshot::Sender<Result<StyleMap>>),
    List(oneshot::Sender<Vec<PageElement>>),
    Render(oneshot::Sender<String>),
    Snapshot(oneshot::Sender<Page>),
    Close(oneshot::Sender<Page>),
}

/// An async-friendly handle to a page owned by a dedicated worker thread.
///
/// The worker is the only code that touches the `Page`; handles can be
/// cloned and shared across tasks, and every command runs to completion
/// before the next one starts, so the element sequence and the selection
/// are never observed half-updated.
#[derive(Clone)]
pub struct PageHandle {
    cmd_tx: Sender<Command>,
}

impl PageHandle {
    /// Move `page` onto a new worker thread
    pub fn spawn(page: Page) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            let mut page = page;
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Add(kind, resp) => {
                        let el = page.add_element(kind).clone();
                        let _ = resp.send(el);
                    }
                    Command::Select(id, resp) => {
                        page.select_element(id);
                        let _ = resp.send(page.selected_id());
                    }
                    Command::Delete(id, resp) => {
                        let _ = resp.send(page.delete_element(id));
                    }
                    Command::UpdateContent(id, content, resp) => {
                        let _ = resp.send(page.update_content(id, content));
                    }
                    Command::UpdateStyles(id, patch, resp) => {
                        let _ = resp.send(page.update_styles(id, &patch));
                    }
                    Command::UpdateGlobalStyles(patch, resp) => {
                        page.update_global_styles(patch);
                        let _ = resp.send(());
                    }
                    Command::EffectiveStyles(id, resp) => {
                        let _ = resp.send(page.effective_styles(id));
                    }
                    Command::List(resp) => {
                        let _ = resp.send(page.list_elements().to_vec());
                    }
                    Command::Render(resp) => {
                        let _ = resp.send(rendering::render(&page));
                    }
                    Command::Snapshot(resp) => {
                        let _ = resp.send(page.clone());
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(page);
                        debug!("page worker closed");
                        return;
                    }
                }
            }
            debug!("all page handles dropped; worker exiting");
        });

        Self { cmd_tx }
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(make(tx))
            .map_err(|_| Error::Other("page worker has shut down".into()))?;
        rx.await
            .map_err(|e| Error::Other(format!("page worker dropped the request: {}", e)))
    }

    pub async fn add_element(&self, kind: ElementKind) -> Result<PageElement> {
        self.request(|tx| Command::Add(kind, tx)).await
    }

    /// Select `id` and return the selection after the call
    pub async fn select_element(&self, id: ElementId) -> Result<Option<ElementId>> {
        self.request(|tx| Command::Select(id, tx)).await
    }

    pub async fn delete_element(&self, id: ElementId) -> Result<Option<PageElement>> {
        self.request(|tx| Command::Delete(id, tx)).await
    }

    pub async fn update_content(&self, id: ElementId, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        self.request(|tx| Command::UpdateContent(id, content, tx)).await?
    }

    pub async fn update_styles(&self, id: ElementId, patch: StylePatch) -> Result<()> {
        self.request(|tx| Command::UpdateStyles(id, patch, tx)).await?
    }

    pub async fn update_global_styles(&self, patch: GlobalStylesPatch) -> Result<()> {
        self.request(|tx| Command::UpdateGlobalStyles(patch, tx)).await
    }

    pub async fn effective_styles(&self, id: ElementId) -> Result<StyleMap> {
        self.request(|tx| Command::EffectiveStyles(id, tx)).await?
    }

    pub async fn list_elements(&self) -> Result<Vec<PageElement>> {
        self.request(Command::List).await
    }

    pub async fn render(&self) -> Result<String> {
        self.request(Command::Render).await
    }

    /// A copy of the page as it is now
    pub async fn snapshot(&self) -> Result<Page> {
        self.request(Command::Snapshot).await
    }

    /// Stop the worker and take the page back. Other clones of this handle
    /// will get errors afterwards.
    pub async fn close(self) -> Result<Page> {
        self.request(Command::Close).await
    }
}

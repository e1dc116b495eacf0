use thiserror::Error;

pub const LOGO_ALT: &str = "Maartand logo";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LogoError {
    #[error("Could not create a local preview: {0}")]
    PreviewUnavailable(String),
}

/// Source of browser-local object URLs for selected files.
pub trait ObjectUrlStore {
    type Handle;

    fn create(&self, handle: &Self::Handle) -> Result<String, LogoError>;
    fn revoke(&self, url: &str);
}

/// Holds at most one live object URL. Replacing, clearing or dropping the
/// preview revokes the URL it held.
pub struct LogoPreview<S: ObjectUrlStore> {
    store: S,
    current: Option<String>,
}

impl<S: ObjectUrlStore> LogoPreview<S> {
    pub fn new(store: S) -> Self {
        Self { store, current: None }
    }

    pub fn select(&mut self, handle: &S::Handle) -> Result<&str, LogoError> {
        let url = self.store.create(handle)?;
        if let Some(previous) = self.current.replace(url) {
            self.store.revoke(&previous);
        }
        Ok(self.current.as_deref().unwrap_or_default())
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.store.revoke(&previous);
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl<S: ObjectUrlStore> Drop for LogoPreview<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoView {
    Image { src: String, alt: &'static str },
    UploadButton,
}

/// The local preview takes precedence over the configured logo.
pub fn logo_view(preview: Option<&str>, logo_src: &str) -> LogoView {
    match preview.filter(|src| !src.is_empty()) {
        Some(src) => LogoView::Image { src: src.to_string(), alt: LOGO_ALT },
        None if !logo_src.is_empty() => LogoView::Image { src: logo_src.to_string(), alt: LOGO_ALT },
        None => LogoView::UploadButton,
    }
}

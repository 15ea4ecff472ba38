//! Clipboard abstraction for copying swatch hex codes.

use crate::controller::SelectionController;
use crate::swatch::SwatchSlot;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::RwLock;
use thiserror::Error;

/// Clipboard errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A place text can be copied to.
///
/// Writes are asynchronous because the browser clipboard is.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> BoxFuture<'_, ClipboardResult<()>>;
}

/// User-facing result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyNotice {
    Copied(String),
    Failed(String),
}

impl CopyNotice {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyNotice::Copied(_))
    }

    /// Message to show the user.
    pub fn message(&self) -> String {
        match self {
            CopyNotice::Copied(hex) => format!("Hex code {} copied to clipboard!", hex),
            CopyNotice::Failed(_) => "Failed to copy hex code to clipboard.".to_string(),
        }
    }
}

impl fmt::Display for CopyNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Copy a hex code to the clipboard. Failures become a notice, never an error.
pub async fn copy_hex<C: Clipboard + ?Sized>(clipboard: &C, hex: &str) -> CopyNotice {
    match clipboard.write_text(hex).await {
        Ok(()) => {
            log::info!("Copied {} to clipboard", hex);
            CopyNotice::Copied(hex.to_string())
        }
        Err(e) => {
            log::warn!("Failed to copy {}: {}", hex, e);
            CopyNotice::Failed(hex.to_string())
        }
    }
}

/// Copy the hex code of one of the controller's swatches.
///
/// The hex is read up front, so the controller is not borrowed across the await.
pub fn copy_swatch<'a, C: Clipboard + ?Sized>(
    controller: &SelectionController,
    slot: SwatchSlot,
    clipboard: &'a C,
) -> impl Future<Output = CopyNotice> + use<'a, C> {
    let hex = controller.swatch(slot).hex.clone();
    async move { copy_hex(clipboard, &hex).await }
}

/// In-memory clipboard for testing and headless use.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RwLock<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> BoxFuture<'_, ClipboardResult<()>> {
        let text = text.to_string();
        Box::pin(async move {
            let mut contents = self
                .contents
                .write()
                .map_err(|e| ClipboardError::Write(format!("Lock error: {}", e)))?;
            *contents = Some(text);
            Ok(())
        })
    }
}

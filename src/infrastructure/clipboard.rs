use super::errors::InfraResult;
use tracing::debug;

pub struct ClipboardService;

impl ClipboardService {
    /// Puts `text` on the system clipboard and hands it back.
    pub fn copy(text: String) -> InfraResult<String> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.clone())?;
        debug!(len = text.len(), "copied to clipboard");
        Ok(text)
    }
}

use std::sync::{Arc, Mutex};

use crate::error::ScrubResult;

/// Clipboard abstraction so the controller can be driven without a
/// display server.
pub trait Clipboard: Send {
    fn set_text(&mut self, contents: &str) -> ScrubResult<()>;
}

/// System clipboard using arboard. Connects lazily, so construction never
/// fails on headless machines; the first copy reports the failure instead.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn ensure(&mut self) -> ScrubResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        Ok(self.inner.as_mut().expect("clipboard just initialized"))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, contents: &str) -> ScrubResult<()> {
        let clipboard = self.ensure()?;
        clipboard.set_text(contents)?;
        Ok(())
    }
}

/// In-memory clipboard for tests and headless runs. The shared handle lets
/// a test observe what was copied.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    value: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Arc<Mutex<String>> {
        self.value.clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, contents: &str) -> ScrubResult<()> {
        *self.value.lock().expect("clipboard lock") = contents.to_string();
        Ok(())
    }
}

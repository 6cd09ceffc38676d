use crossterm::event::KeyEvent;
use tracing::{debug, error, info};
use tui_textarea::{CursorMove, TextArea};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::settings::{SettingsPanel, CAP_WEIGHT, FIELD_COUNT, KEEP_WEIGHT};
use crate::transform;
use crate::tui::events::{map_key, Action};

const BUFFER_PLACEHOLDER: &str = "Type something";

/// Which pane receives keystrokes. The integer view of this value ranges
/// over `[0, FIELD_COUNT]`, with `FIELD_COUNT` as the sentinel meaning the
/// buffer side is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Buffer,
}

impl Focus {
    pub fn index(self) -> usize {
        match self {
            Focus::Field(i) => i,
            Focus::Buffer => FIELD_COUNT,
        }
    }

    pub fn from_index(index: usize) -> Self {
        if index >= FIELD_COUNT {
            Focus::Buffer
        } else {
            Focus::Field(index)
        }
    }
}

/// Application state: the editable source buffer, the derived cleaned
/// buffer, the parameter fields, and the single focus value that styling
/// and key routing are both driven by.
pub struct App {
    pub source: TextArea<'static>,
    pub derived: TextArea<'static>,
    pub settings: SettingsPanel,
    pub focus: Focus,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub should_quit: bool,
    clipboard: Box<dyn Clipboard>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_clipboard(Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(clipboard: Box<dyn Clipboard>) -> Self {
        let mut app = Self {
            source: Self::fresh_buffer(),
            derived: Self::fresh_buffer(),
            settings: SettingsPanel::new(),
            focus: Focus::Buffer,
            status_message: None,
            error_message: None,
            should_quit: false,
            clipboard,
        };
        app.refresh_derived();
        app
    }

    fn fresh_buffer() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(BUFFER_PLACEHOLDER);
        textarea
    }

    pub fn source_text(&self) -> String {
        self.source.lines().join("\n")
    }

    pub fn derived_text(&self) -> String {
        self.derived.lines().join("\n")
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.status_message = None;
    }

    /// Handle one key press to completion. Whatever the key did, the
    /// derived buffer is recomputed before returning, so it never lags
    /// the source or the parameters.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            Action::Copy => self.copy_derived(),
            Action::Reset => self.reset(),
            Action::CursorStyle => {
                self.settings.cycle_cursor_mode();
                debug!(mode = self.settings.cursor_mode().label(), "cursor mode cycled");
            }
            Action::FocusNext => self.focus_next(),
            Action::FocusPrevious => self.focus_previous(),
            Action::Up => self.handle_up(),
            Action::Down => self.handle_down(),
            Action::Left => self.handle_left(),
            Action::Right => self.handle_right(),
            Action::Confirm => self.handle_confirm(),
            Action::Edit(key) => self.handle_edit(key),
        }
        self.refresh_derived();
    }

    /// Tab advances through the fields and crosses over to the buffer
    /// from the last one; it does nothing while the buffer is focused.
    fn focus_next(&mut self) {
        if let Focus::Field(i) = self.focus {
            self.focus = Focus::from_index(i + 1);
        }
    }

    fn focus_previous(&mut self) {
        if let Focus::Field(i) = self.focus {
            self.focus = Focus::Field(i.saturating_sub(1));
        }
    }

    /// Up walks backwards through the fields; from the buffer it only
    /// leaves when the cursor already sits on the first row.
    fn handle_up(&mut self) {
        match self.focus {
            Focus::Field(i) => self.focus = Focus::Field(i.saturating_sub(1)),
            Focus::Buffer => {
                if self.source.cursor().0 == 0 {
                    self.focus = Focus::Field(FIELD_COUNT - 1);
                } else {
                    self.source.move_cursor(CursorMove::Up);
                }
            }
        }
    }

    fn handle_down(&mut self) {
        match self.focus {
            Focus::Field(i) => self.focus = Focus::from_index(i + 1),
            Focus::Buffer => self.source.move_cursor(CursorMove::Down),
        }
    }

    /// Enter confirms a field (moving on, into the buffer after the last
    /// one) and is an ordinary newline inside the buffer.
    fn handle_confirm(&mut self) {
        match self.focus {
            Focus::Field(i) => self.focus = Focus::from_index(i + 1),
            Focus::Buffer => self.source.insert_newline(),
        }
    }

    fn handle_left(&mut self) {
        match self.focus {
            Focus::Field(i) if i == KEEP_WEIGHT || i == CAP_WEIGHT => {
                self.settings.step_down(i);
            }
            Focus::Field(i) => {
                if let Some(field) = self.settings.field_mut(i) {
                    field.textarea_mut().move_cursor(CursorMove::Back);
                }
            }
            Focus::Buffer => self.source.move_cursor(CursorMove::Back),
        }
    }

    fn handle_right(&mut self) {
        match self.focus {
            Focus::Field(i) if i == KEEP_WEIGHT || i == CAP_WEIGHT => {
                self.settings.step_up(i);
            }
            Focus::Field(i) => {
                if let Some(field) = self.settings.field_mut(i) {
                    field.textarea_mut().move_cursor(CursorMove::Forward);
                }
            }
            Focus::Buffer => self.source.move_cursor(CursorMove::Forward),
        }
    }

    fn handle_edit(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Field(i) => {
                self.settings.handle_edit(i, key);
            }
            Focus::Buffer => {
                self.source.input(key);
            }
        }
    }

    /// Hand the current cleaned text to the clipboard. Failure is shown on
    /// the status line and the session continues.
    pub fn copy_derived(&mut self) {
        let text = self.derived_text();
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                debug!(bytes = text.len(), "copied cleaned text");
                self.set_status("Copied cleaned text to clipboard");
            }
            Err(e) => {
                error!("clipboard copy failed: {}", e);
                self.set_error(format!("Copy failed: {}", e));
            }
        }
    }

    /// Start over with two empty buffers. Parameter values and focus are
    /// left alone.
    pub fn reset(&mut self) {
        info!("buffers reset");
        self.source = Self::fresh_buffer();
        self.derived = Self::fresh_buffer();
        self.status_message = None;
        self.error_message = None;
    }

    /// Rebuild the cleaned buffer from the current source text and
    /// parameter values. Cheap enough to run on every keystroke.
    fn refresh_derived(&mut self) {
        let cleaned = transform::rewrite_weights(
            &self.source_text(),
            self.settings.keep_name(),
            self.settings.keep_weight(),
            self.settings.cap_weight(),
        );
        let mut derived = TextArea::new(cleaned.split('\n').map(str::to_string).collect());
        derived.set_placeholder_text(BUFFER_PLACEHOLDER);
        self.derived = derived;
    }
}

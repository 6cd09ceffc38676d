use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::settings::FIELD_COUNT;

/// Screen regions, recomputed from the frame area on every draw. The
/// parameter rows sit on top, the two buffers split the middle, and one
/// line each goes to the status line and the help bar.
#[derive(Debug)]
pub struct AppLayout {
    pub fields: [Rect; FIELD_COUNT],
    pub source: Rect,
    pub derived: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keep-name field
                Constraint::Length(1), // Keep-weight field
                Constraint::Length(1), // Cap-weight field
                Constraint::Min(3),    // Buffer pair
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let editors = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50), // Source buffer
                Constraint::Percentage(50), // Cleaned buffer
            ])
            .split(rows[3]);

        Self {
            fields: [rows[0], rows[1], rows[2]],
            source: editors[0],
            derived: editors[1],
            status: rows[4],
            help: rows[5],
        }
    }

    /// Split one parameter row into its prompt label and the input area.
    pub fn field_row(area: Rect, prompt_width: u16) -> (Rect, Rect) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
            .split(area);
        (parts[0], parts[1])
    }
}

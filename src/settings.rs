use tui_textarea::{CursorMove, Input, TextArea};

pub const KEEP_NAME: usize = 0;
pub const KEEP_WEIGHT: usize = 1;
pub const CAP_WEIGHT: usize = 2;
pub const FIELD_COUNT: usize = 3;

const NAME_MAX_CHARS: usize = 32;
const WEIGHT_MAX_CHARS: usize = 4;
const WEIGHT_STEP: f64 = 0.05;

/// How the field cursors are drawn. Purely cosmetic; cycled with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    #[default]
    Blink,
    Static,
    Hidden,
}

impl CursorMode {
    pub fn next(self) -> Self {
        match self {
            CursorMode::Blink => CursorMode::Static,
            CursorMode::Static => CursorMode::Hidden,
            CursorMode::Hidden => CursorMode::Blink,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CursorMode::Blink => "blink",
            CursorMode::Static => "static",
            CursorMode::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    /// Free text up to a character limit
    Name { max_chars: usize },
    /// Finite decimal in [0, 10), up to a character limit
    Weight { max_chars: usize },
}

impl FieldKind {
    fn validates(&self, text: &str) -> bool {
        match *self {
            FieldKind::Name { max_chars } => text.chars().count() <= max_chars,
            FieldKind::Weight { max_chars } => {
                if text.chars().count() > max_chars {
                    return false;
                }
                match text.parse::<f64>() {
                    Ok(value) => value.is_finite() && value >= 0.0 && value < 10.0,
                    Err(_) => false,
                }
            }
        }
    }
}

/// One prompt-labelled input line. The content is re-validated after every
/// mutating input and the edit is rolled back when the result would be
/// invalid, so the text held here is valid at all times.
pub struct Field {
    textarea: TextArea<'static>,
    prompt: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
}

impl Field {
    fn new(prompt: &'static str, placeholder: &'static str, initial: &str, kind: FieldKind) -> Self {
        let mut field = Self {
            textarea: TextArea::default(),
            prompt,
            placeholder,
            kind,
        };
        field.set_text(initial);
        field
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    fn set_text(&mut self, text: &str) {
        let mut textarea = if text.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(vec![text.to_string()])
        };
        textarea.set_placeholder_text(self.placeholder);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    fn is_valid(&self) -> bool {
        self.textarea.lines().len() == 1 && self.kind.validates(self.text())
    }

    /// Apply one input. Returns whether the text changed; a change that
    /// fails validation is undone and reported as unchanged.
    fn apply(&mut self, input: Input) -> bool {
        let lines = self.textarea.lines().to_vec();
        let cursor = self.textarea.cursor();

        if !self.textarea.input(input) {
            // Cursor motion and other non-edits go through unvalidated
            return false;
        }
        if self.is_valid() {
            return true;
        }

        self.set_text(&lines.join("\n"));
        self.textarea
            .move_cursor(CursorMove::Jump(cursor.0 as u16, cursor.1 as u16));
        false
    }
}

/// The three weight-normalization parameters, held as always-valid input
/// fields, plus the shared cursor display mode.
pub struct SettingsPanel {
    fields: [Field; FIELD_COUNT],
    cursor_mode: CursorMode,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self {
            fields: [
                Field::new("> ", "Lora to keep", "", FieldKind::Name { max_chars: NAME_MAX_CHARS }),
                Field::new(
                    "Keep: ",
                    "0.75",
                    "0.75",
                    FieldKind::Weight { max_chars: WEIGHT_MAX_CHARS },
                ),
                Field::new(
                    "Lose: ",
                    "0.15",
                    "0.15",
                    FieldKind::Weight { max_chars: WEIGHT_MAX_CHARS },
                ),
            ],
            cursor_mode: CursorMode::Blink,
        }
    }

    /// Tag name whose weight is pinned instead of capped
    pub fn keep_name(&self) -> &str {
        self.fields[KEEP_NAME].text()
    }

    /// Weight given to the kept tag, as entered
    pub fn keep_weight(&self) -> &str {
        self.fields[KEEP_WEIGHT].text()
    }

    /// Upper bound applied to every other tag's weight
    pub fn cap_weight(&self) -> &str {
        self.fields[CAP_WEIGHT].text()
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub fn cycle_cursor_mode(&mut self) {
        self.cursor_mode = self.cursor_mode.next();
    }

    /// Route one input to the field at `index`; out-of-range indices are
    /// ignored. Returns whether the field text changed.
    pub fn handle_edit(&mut self, index: usize, input: impl Into<Input>) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => field.apply(input.into()),
            None => false,
        }
    }

    pub fn step_up(&mut self, index: usize) {
        self.step(index, WEIGHT_STEP);
    }

    pub fn step_down(&mut self, index: usize) {
        self.step(index, -WEIGHT_STEP);
    }

    /// Nudge a weight field by `delta`, two-decimal formatted. The name
    /// field and any step that would leave the valid range are no-ops.
    fn step(&mut self, index: usize, delta: f64) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        if !matches!(field.kind, FieldKind::Weight { .. }) {
            return;
        }
        let Ok(current) = field.text().parse::<f64>() else {
            return;
        };
        let next = format!("{:.2}", current + delta);
        if field.kind.validates(&next) {
            field.set_text(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_textarea::Key;

    fn key(c: char) -> Input {
        Input {
            key: Key::Char(c),
            ..Input::default()
        }
    }

    fn special(k: Key) -> Input {
        Input {
            key: k,
            ..Input::default()
        }
    }

    #[test]
    fn initial_values() {
        let panel = SettingsPanel::new();
        assert_eq!(panel.keep_name(), "");
        assert_eq!(panel.keep_weight(), "0.75");
        assert_eq!(panel.cap_weight(), "0.15");
        assert_eq!(panel.cursor_mode(), CursorMode::Blink);
    }

    #[test]
    fn name_accepts_free_text() {
        let mut panel = SettingsPanel::new();
        for c in "foo-bar_v2".chars() {
            assert!(panel.handle_edit(KEEP_NAME, key(c)));
        }
        assert_eq!(panel.keep_name(), "foo-bar_v2");
    }

    #[test]
    fn name_stops_at_thirty_two_chars() {
        let mut panel = SettingsPanel::new();
        for _ in 0..32 {
            assert!(panel.handle_edit(KEEP_NAME, key('a')));
        }
        assert!(!panel.handle_edit(KEEP_NAME, key('a')));
        assert_eq!(panel.keep_name().chars().count(), 32);
    }

    #[test]
    fn weight_rejects_a_fifth_char() {
        let mut panel = SettingsPanel::new();
        assert!(!panel.handle_edit(KEEP_WEIGHT, key('9')));
        assert_eq!(panel.keep_weight(), "0.75");
    }

    #[test]
    fn weight_rejects_letters() {
        let mut panel = SettingsPanel::new();
        // Make room first so the length limit is not what rejects it
        assert!(panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace)));
        assert!(!panel.handle_edit(KEEP_WEIGHT, key('x')));
        assert_eq!(panel.keep_weight(), "0.7");
    }

    #[test]
    fn weight_cannot_be_emptied() {
        let mut panel = SettingsPanel::new();
        assert!(panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace))); // 0.7
        assert!(panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace))); // 0.
        assert!(panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace))); // 0
        assert!(!panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace)));
        assert_eq!(panel.keep_weight(), "0");
    }

    #[test]
    fn weight_rejects_values_of_ten_or_more() {
        let mut panel = SettingsPanel::new();
        for _ in 0..3 {
            panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace));
        }
        assert_eq!(panel.keep_weight(), "0");
        // "90" would be in range lengthwise but out of range numerically
        panel.handle_edit(KEEP_WEIGHT, special(Key::Home));
        assert!(!panel.handle_edit(KEEP_WEIGHT, key('9')));
        assert_eq!(panel.keep_weight(), "0");
    }

    #[test]
    fn weight_rejects_negative_values() {
        let mut panel = SettingsPanel::new();
        assert!(panel.handle_edit(KEEP_WEIGHT, special(Key::Backspace)));
        assert_eq!(panel.keep_weight(), "0.7");
        // "-0.7" fits in four chars but sits below the range
        panel.handle_edit(KEEP_WEIGHT, special(Key::Home));
        assert!(!panel.handle_edit(KEEP_WEIGHT, key('-')));
        assert_eq!(panel.keep_weight(), "0.7");
    }

    #[test]
    fn rejected_edit_restores_the_cursor() {
        let mut panel = SettingsPanel::new();
        panel.handle_edit(KEEP_WEIGHT, special(Key::Home));
        assert!(!panel.handle_edit(KEEP_WEIGHT, key('-')));
        assert_eq!(panel.keep_weight(), "0.75");
        let field = panel.field(KEEP_WEIGHT).unwrap();
        assert_eq!(field.textarea().cursor(), (0, 0));
    }

    #[test]
    fn step_moves_by_five_hundredths() {
        let mut panel = SettingsPanel::new();
        panel.step_up(KEEP_WEIGHT);
        assert_eq!(panel.keep_weight(), "0.80");
        panel.step_down(KEEP_WEIGHT);
        assert_eq!(panel.keep_weight(), "0.75");
    }

    #[test]
    fn five_steps_up_and_down_round_trip() {
        let mut panel = SettingsPanel::new();
        for _ in 0..5 {
            panel.step_up(CAP_WEIGHT);
        }
        for _ in 0..5 {
            panel.step_down(CAP_WEIGHT);
        }
        let value: f64 = panel.cap_weight().parse().unwrap();
        assert!((value - 0.15).abs() < 0.001);
    }

    #[test]
    fn stepping_saturates_at_the_range_edges() {
        let mut panel = SettingsPanel::new();
        for _ in 0..200 {
            panel.step_up(CAP_WEIGHT);
        }
        assert_eq!(panel.cap_weight(), "9.95");
        for _ in 0..250 {
            panel.step_down(CAP_WEIGHT);
        }
        assert_eq!(panel.cap_weight(), "0.00");
    }

    #[test]
    fn name_field_ignores_steps() {
        let mut panel = SettingsPanel::new();
        panel.handle_edit(KEEP_NAME, key('a'));
        panel.step_up(KEEP_NAME);
        panel.step_down(KEEP_NAME);
        assert_eq!(panel.keep_name(), "a");
    }

    #[test]
    fn cursor_mode_cycles_back_to_blink() {
        let mut panel = SettingsPanel::new();
        panel.cycle_cursor_mode();
        assert_eq!(panel.cursor_mode(), CursorMode::Static);
        panel.cycle_cursor_mode();
        assert_eq!(panel.cursor_mode(), CursorMode::Hidden);
        panel.cycle_cursor_mode();
        assert_eq!(panel.cursor_mode(), CursorMode::Blink);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut panel = SettingsPanel::new();
        assert!(!panel.handle_edit(FIELD_COUNT, key('a')));
        panel.step_up(FIELD_COUNT);
        assert_eq!(panel.keep_name(), "");
        assert_eq!(panel.keep_weight(), "0.75");
        assert_eq!(panel.cap_weight(), "0.15");
    }
}

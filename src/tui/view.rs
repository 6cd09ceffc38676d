use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::config::ThemeColors;
use crate::settings::{CursorMode, FIELD_COUNT};

use super::events::KEY_BINDINGS;
use super::layout::AppLayout;

/// Draw one frame. All styling happens here, from scratch, off the theme
/// and the current focus; the state structs carry no style of their own.
pub fn draw(f: &mut Frame, app: &mut App, colors: &ThemeColors) {
    let layout = AppLayout::new(f.area());

    draw_fields(f, app, colors, &layout);
    draw_buffers(f, app, colors, &layout);
    draw_status(f, app, colors, &layout);
    draw_help(f, colors, &layout);
}

fn draw_fields(f: &mut Frame, app: &mut App, colors: &ThemeColors, layout: &AppLayout) {
    let cursor_mode = app.settings.cursor_mode();

    for i in 0..FIELD_COUNT {
        let focused = app.focus == Focus::Field(i);
        let Some(field) = app.settings.field_mut(i) else {
            continue;
        };
        let prompt = field.prompt();
        let (prompt_area, input_area) =
            AppLayout::field_row(layout.fields[i], prompt.chars().count() as u16);

        let prompt_style = if focused {
            Style::default().fg(colors.accent)
        } else {
            Style::default().fg(colors.dim)
        };
        f.render_widget(Paragraph::new(prompt).style(prompt_style), prompt_area);

        let textarea = field.textarea_mut();
        textarea.set_style(Style::default().fg(if focused { colors.text } else { colors.dim }));
        textarea.set_placeholder_style(Style::default().fg(if focused {
            colors.placeholder_focused
        } else {
            colors.placeholder
        }));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(field_cursor_style(cursor_mode, focused, colors));
        f.render_widget(&*textarea, input_area);
    }
}

/// An unfocused field shows no cursor at all; a focused one follows the
/// cycling display mode.
fn field_cursor_style(mode: CursorMode, focused: bool, colors: &ThemeColors) -> Style {
    if !focused {
        return Style::default();
    }
    match mode {
        CursorMode::Blink => Style::default()
            .bg(colors.cursor)
            .add_modifier(Modifier::SLOW_BLINK),
        CursorMode::Static => Style::default().bg(colors.cursor),
        CursorMode::Hidden => Style::default(),
    }
}

fn draw_buffers(f: &mut Frame, app: &mut App, colors: &ThemeColors, layout: &AppLayout) {
    let focused = app.focus == Focus::Buffer;

    let source = &mut app.source;
    source.set_style(Style::default().fg(colors.text));
    source.set_line_number_style(Style::default().fg(colors.line_number));
    source.set_placeholder_style(Style::default().fg(if focused {
        colors.placeholder_focused
    } else {
        colors.placeholder
    }));
    if focused {
        source.set_cursor_style(Style::default().bg(colors.cursor));
        source.set_cursor_line_style(
            Style::default()
                .bg(colors.cursor_line_bg)
                .fg(colors.cursor_line_fg),
        );
    } else {
        source.set_cursor_style(Style::default());
        source.set_cursor_line_style(Style::default());
    }
    source.set_block(pane_block(" prompt ", focused, colors));
    f.render_widget(&*source, layout.source);

    let derived = &mut app.derived;
    derived.set_style(Style::default().fg(colors.text));
    derived.set_line_number_style(Style::default().fg(colors.line_number));
    derived.set_placeholder_style(Style::default().fg(colors.placeholder));
    // The cleaned side never owns the cursor
    derived.set_cursor_style(Style::default());
    derived.set_cursor_line_style(Style::default());
    derived.set_block(pane_block(" cleaned ", false, colors));
    f.render_widget(&*derived, layout.derived);
}

fn pane_block(title: &'static str, focused: bool, colors: &ThemeColors) -> Block<'static> {
    if focused {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border_focused))
            .title(title)
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .title(title)
    }
}

fn draw_status(f: &mut Frame, app: &App, colors: &ThemeColors, layout: &AppLayout) {
    let (text, style) = if let Some(message) = &app.error_message {
        (message.as_str(), Style::default().fg(colors.error))
    } else if let Some(message) = &app.status_message {
        (message.as_str(), Style::default().fg(colors.accent))
    } else {
        ("", Style::default())
    };
    f.render_widget(Paragraph::new(text).style(style), layout.status);
}

fn draw_help(f: &mut Frame, colors: &ThemeColors, layout: &AppLayout) {
    let mut spans = Vec::new();
    for (i, (keys, description)) in KEY_BINDINGS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(colors.dim)));
        }
        spans.push(Span::styled(
            *keys,
            Style::default().fg(colors.dim).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(colors.dim),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), layout.help);
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Mode;
use crate::theme::Theme;

/// Render the help footer widget
pub fn render_help_footer(frame: &mut Frame, mode: Mode, theme: &Theme, area: Rect) {
    let help_text = match mode {
        Mode::Dialog => get_dialog_mode_help(),
        Mode::Picker => get_picker_mode_help(),
        Mode::HexInput => get_hex_input_help(),
    };

    let spans: Vec<Span> = help_text
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(theme.colors.key)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(theme.colors.text_muted)),
                Span::raw("  "),
            ]
        })
        .collect();

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.colors.bar_bg));

    frame.render_widget(paragraph, area);
}

fn get_dialog_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "Move"),
        ("Enter", "Choose"),
        ("1/2", "Current/Standard"),
        ("c", "Custom"),
        ("4", "Last Custom"),
        ("p", "Default"),
        ("o", "OK"),
        ("Esc", "Cancel"),
    ]
}

fn get_picker_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "Channel"),
        ("h/l", "-/+1"),
        ("H/L", "-/+16"),
        ("#", "Hex"),
        ("Enter", "OK"),
        ("Esc", "Cancel"),
    ]
}

fn get_hex_input_help() -> Vec<(&'static str, &'static str)> {
    vec![("0-9a-f", "Digit"), ("Enter", "Apply"), ("Esc", "Back")]
}

use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::color::Rgba;
use crate::theme::Theme;
use crate::tui::ui::centered_rect_fixed;

use super::swatch::{fill_style, swatch};

const DIALOG_WIDTH: u16 = 64;
const BUTTON_WIDTH: u16 = 19;

/// Render the color choice dialog centered in `area`
pub fn render_color_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog = &app.dialog;
    let theme = &app.theme;
    let prefs_height = if app.has_prefs() { 2 } else { 0 };
    let dialog_area = centered_rect_fixed(DIALOG_WIDTH, 17 + prefs_height, area);

    // Clear background
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {} ", dialog.window_title()))
        .title_style(
            Style::default()
                .fg(theme.colors.header)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.colors.border_focus));

    let inner = block.inner(dialog_area).inner(Margin::new(1, 1));
    frame.render_widget(block, dialog_area);

    // Prompt, three rows, preview, checkbox, button box
    let [prompt_area, _, current_area, _, standard_area, _, custom_area, _, selected_area, prefs_area, _, buttons_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(prefs_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(dialog.prompt()).style(Style::default().fg(theme.colors.text)),
        prompt_area,
    );

    render_row(
        frame,
        theme,
        current_area,
        "Choose",
        app.focus == Focus::Current,
        &dialog.current_label(),
        dialog.current_color(),
    );
    render_row(
        frame,
        theme,
        standard_area,
        "Choose",
        app.focus == Focus::Standard,
        &dialog.standard_label(),
        dialog.standard_color(),
    );
    render_row(
        frame,
        theme,
        custom_area,
        "Custom color ...",
        app.focus == Focus::Custom,
        &dialog.custom_label(),
        dialog.custom_color(),
    );

    frame.render_widget(
        swatch(
            &dialog.selected_label(),
            dialog.selected_color(),
            selected_area.width,
        )
        .block(
            Block::default()
                .style(fill_style(dialog.selected_color()))
                .padding(Padding::new(1, 1, 1, 0)),
        ),
        selected_area,
    );

    if let Some(label) = dialog.prefs_label() {
        let [_, checkbox_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(prefs_area);
        let mark = if dialog.is_prefs_color() { "[x]" } else { "[ ]" };
        let line = Line::from(vec![
            Span::styled(mark, button_style(theme, app.focus == Focus::Prefs)),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(theme.colors.text)),
        ]);
        frame.render_widget(Paragraph::new(line), checkbox_area);
    }

    render_button_box(frame, app, buttons_area);
}

/// A "choose" button followed by a label filled with the row's color
fn render_row(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    button: &str,
    focused: bool,
    label: &str,
    color: Rgba,
) {
    let [button_area, _, label_area] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(button_text(button, focused)).style(button_style(theme, focused)),
        button_area,
    );
    frame.render_widget(swatch(label, color, label_area.width), label_area);
}

/// OK / Cancel, right aligned
fn render_button_box(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            button_text("OK", app.focus == Focus::Ok),
            button_style(theme, app.focus == Focus::Ok),
        ),
        Span::raw("  "),
        Span::styled(
            button_text("Cancel", app.focus == Focus::Cancel),
            button_style(theme, app.focus == Focus::Cancel),
        ),
    ])
    .right_aligned();

    frame.render_widget(Paragraph::new(line), area);
}

fn button_text(label: &str, focused: bool) -> String {
    if focused {
        format!("▶[ {} ]", label)
    } else {
        format!(" [ {} ]", label)
    }
}

fn button_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.colors.button_focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.colors.button)
    }
}

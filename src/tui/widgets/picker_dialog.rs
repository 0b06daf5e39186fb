use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::picker::{PickerField, RgbPicker};
use crate::theme::Theme;
use crate::tui::ui::centered_rect_fixed;

use super::swatch::swatch;

const PICKER_WIDTH: u16 = 50;
const PICKER_HEIGHT: u16 = 14;
const LABEL_WIDTH: u16 = 8;

/// Render the custom color picker centered in `area`
pub fn render_picker_dialog(frame: &mut Frame, picker: &RgbPicker, theme: &Theme, area: Rect) {
    let dialog_area = centered_rect_fixed(PICKER_WIDTH, PICKER_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {} ", picker.title))
        .title_style(
            Style::default()
                .fg(theme.colors.header)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.colors.border_focus));

    let inner = block.inner(dialog_area).inner(Margin::new(1, 1));
    frame.render_widget(block, dialog_area);

    let [red_area, _, green_area, _, blue_area, _, hex_area, _, preview_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

    render_channel(frame, picker, theme, PickerField::Red, Color::Red, red_area);
    render_channel(frame, picker, theme, PickerField::Green, Color::Green, green_area);
    render_channel(frame, picker, theme, PickerField::Blue, Color::Blue, blue_area);
    render_hex_field(frame, picker, theme, hex_area);

    frame.render_widget(
        swatch(&picker.color.name(), picker.color, preview_area.width),
        preview_area,
    );
}

fn field_label(picker: &RgbPicker, theme: &Theme, field: PickerField) -> Span<'static> {
    let focused = picker.field == field;
    let marker = if focused { "▶" } else { " " };
    let style = if focused {
        Style::default()
            .fg(theme.colors.button_focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.colors.text)
    };
    Span::styled(format!("{}{}", marker, field.label()), style)
}

fn render_channel(
    frame: &mut Frame,
    picker: &RgbPicker,
    theme: &Theme,
    field: PickerField,
    gauge_color: Color,
    area: Rect,
) {
    let value = picker.channel(field).unwrap_or(0);

    let [label_area, gauge_area] =
        Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Fill(1)]).areas(area);

    frame.render_widget(Paragraph::new(field_label(picker, theme, field)), label_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(theme.colors.bar_bg))
        .ratio(value as f64 / u8::MAX as f64)
        .label(format!("{:3}", value));
    frame.render_widget(gauge, gauge_area);
}

fn render_hex_field(frame: &mut Frame, picker: &RgbPicker, theme: &Theme, area: Rect) {
    let value = if picker.editing_hex {
        Span::styled(
            format!("#{}_", picker.hex_input),
            Style::default()
                .fg(theme.colors.button_focus)
                .add_modifier(Modifier::UNDERLINED),
        )
    } else {
        Span::styled(picker.color.name(), Style::default().fg(theme.colors.text))
    };

    let line = Line::from(vec![
        field_label(picker, theme, PickerField::Hex),
        Span::raw(" ".repeat((LABEL_WIDTH as usize).saturating_sub(4))),
        value,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

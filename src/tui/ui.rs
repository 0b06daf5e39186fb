use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::picker::RgbPicker;
use crate::theme::Theme;

use super::widgets::{render_color_dialog, render_help_footer, render_picker_dialog};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, body_area, footer_area] = split(frame.area());

    render_header(frame, &app.theme, &app.dialog.window_title(), app.mode, header_area);
    render_color_dialog(frame, app, body_area);
    render_help_footer(frame, app.mode, &app.theme, footer_area);
}

/// Render the custom color picker screen
pub fn render_picker(frame: &mut Frame, picker: &RgbPicker, theme: &Theme) {
    let [header_area, body_area, footer_area] = split(frame.area());

    render_header(frame, theme, &picker.title, picker.mode(), header_area);
    render_picker_dialog(frame, picker, theme, body_area);
    render_help_footer(frame, picker.mode(), theme, footer_area);
}

/// Header, body, footer
fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Render header bar
fn render_header(frame: &mut Frame, theme: &Theme, title: &str, mode: Mode, area: Rect) {
    let mode_str = format!("[{}]", mode);

    let header_text = Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(
            " ".repeat(
                area.width
                    .saturating_sub(title.width() as u16 + mode_str.width() as u16)
                    as usize,
            ),
        ),
        Span::styled(mode_str, Style::default().fg(theme.colors.header)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(theme.colors.bar_bg));

    frame.render_widget(header, area);
}

/// Create a centered rectangle of a fixed size, clipped to `area`
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let [center] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(center);

    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::config::Config;
    use crate::dialog::ColorChoiceDialog;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &ratatui::Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(ask_prefs: bool) -> App {
        let dialog = ColorChoiceDialog::new(
            "Wire",
            Rgba::rgb(255, 0, 0),
            Rgba::rgb(0, 255, 0),
            ask_prefs,
        );
        App::new(dialog, &Config::default())
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(20, 10, area);
        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn test_centered_rect_fixed_clips() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_rect_fixed(20, 10, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_render_dialog_labels() {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        let app = app(true);
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Set Wire Color..."));
        assert!(text.contains("Choose a new wire color."));
        assert!(text.contains("current wire color (#ff0000)"));
        assert!(text.contains("standard wire color (#00ff00)"));
        assert!(text.contains("custom color (#ff0000)"));
        assert!(text.contains("selected color (#ff0000)"));
        assert!(text.contains("[ ] Make this the default wire color"));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn test_header_mode_tag_right_aligned_with_wide_title() {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        let dialog = ColorChoiceDialog::new(
            "Drähte",
            Rgba::rgb(255, 0, 0),
            Rgba::rgb(0, 255, 0),
            false,
        );
        let app = App::new(dialog, &Config::default());
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("Set Drähte Color..."));
        assert!(header.ends_with("[Dialog]"));
    }

    #[test]
    fn test_render_without_prefs() {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        let app = app(false);
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(!screen_text(&terminal).contains("Make this the default"));
    }

    #[test]
    fn test_render_selected_fill() {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut app = app(false);
        app.dialog.choose_standard();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let filled = buffer
            .content()
            .iter()
            .filter(|cell| cell.bg == ratatui::style::Color::Rgb(0, 255, 0))
            .count();
        // Standard row plus the three-line preview
        assert!(filled > 60);
        assert!(screen_text(&terminal).contains("selected color (#00ff00)"));
    }

    #[test]
    fn test_render_picker() {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        let picker = RgbPicker::new(Rgba::rgb(0, 0, 255), "Select custom wire color");
        terminal
            .draw(|frame| render_picker(frame, &picker, &Theme::default()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Select custom wire color"));
        assert!(text.contains("[Picker]"));
        assert!(text.contains("#0000ff"));
        assert!(text.contains("255"));
    }
}

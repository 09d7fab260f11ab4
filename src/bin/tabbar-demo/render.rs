//! Main rendering module
//!
//! Draws the tab bar full screen, the status line in the bar's bottom
//! safe area, and the help popup when it is open.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tabbar::{ui::widgets, Theme};

const KEY_HINTS: &str = " 1-9 tab · ←/→ move · s style · t theme · ? help · q quit";

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(&mut app.tab_bar, area);

    let theme = app.theme();

    let right = match &app.status {
        Some((message, _)) => message.clone(),
        None => format!(
            "{} · {}",
            app.config.bar_style.as_str(),
            app.config.theme.as_str()
        ),
    };
    render_status_line(frame, &right, theme, area);

    if app.show_help {
        render_help(frame, theme, area);
    }
}

/// Key hints on the left, `right` flush right, on the last row
fn render_status_line(frame: &mut Frame, right: &str, theme: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line_area = Rect {
        y: area.bottom() - 1,
        height: 1,
        ..area
    };

    frame.render_widget(Clear, line_area);
    frame.render_widget(Paragraph::new(KEY_HINTS).style(theme.text_dim()), line_area);
    frame.render_widget(
        Paragraph::new(format!("{} ", right))
            .style(theme.text_dim())
            .alignment(Alignment::Right),
        line_area,
    );
}

fn render_help(frame: &mut Frame, theme: &Theme, area: Rect) {
    let content = vec![
        Line::raw(""),
        Line::raw("1-9          Select tab"),
        Line::raw("←/→  h/l     Previous / next tab"),
        Line::raw("Click        Select tab under the mouse"),
        Line::raw("s            Cycle bar style"),
        Line::raw("t            Cycle theme"),
        Line::raw("q            Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[", theme.text_dim()),
            Span::styled("o", theme.tab_active()),
            Span::styled("] ", theme.text_dim()),
            Span::styled("OK", theme.text()),
        ])
        .alignment(Alignment::Center),
    ];

    let height = content.len() as u16 + 2;
    let popup_area = widgets::centered_rect(46, height, area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(content).style(theme.text()).block(
            Block::default()
                .title(" Help ")
                .title_style(theme.title())
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .style(theme.text()),
        ),
        popup_area,
    );
}

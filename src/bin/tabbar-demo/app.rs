//! Application state and event handling
//!
//! Holds the mounted tab bar and routes keyboard and mouse input to it.
//! Style and theme can be cycled at runtime; both go back to the config
//! file unless saving is disabled.

use crate::config::Config;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tabbar::ui::widgets;
use tabbar::{Insets, TabBar, TabItemData, Theme, BAR_HEIGHT};

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub tab_bar: TabBar,
    pub show_help: bool,
    pub persist_config: bool,

    // Status line feedback (message, is_error)
    pub status: Option<(String, bool)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, persist_config: bool) -> Self {
        let tab_bar = TabBar::with_spacing(config.item_spacing, demo_tabs(config.safe_area_bottom))
            .with_tab_bar_style(config.bar_style.style())
            .with_theme(Theme::from_name(config.theme))
            .with_safe_area(Insets::bottom(config.safe_area_bottom));

        Self {
            should_quit: false,
            config,
            tab_bar,
            show_help: false,
            persist_config,
            status: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        self.tab_bar.theme()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Char('o') | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Esc
            ) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.tab_bar.tap(index);
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.step(1),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => self.step(-1),
            KeyCode::Char('s') => self.cycle_bar_style(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if !self.show_help {
            self.tab_bar.handle_mouse(event);
        }
    }

    /// Tap the neighbouring tab, wrapping around at either end
    fn step(&mut self, delta: isize) {
        let len = self.tab_bar.len();
        if len == 0 {
            return;
        }
        let current = self.tab_bar.selected_index().min(len - 1) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.tab_bar.tap(next);
    }

    fn cycle_bar_style(&mut self) {
        self.config.bar_style = self.config.bar_style.next();
        self.tab_bar = self
            .tab_bar
            .clone()
            .with_tab_bar_style(self.config.bar_style.style());
        tracing::info!(style = self.config.bar_style.as_str(), "bar style changed");
        self.save_config(format!("Style: {}", self.config.bar_style.as_str()));
    }

    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.tab_bar = self
            .tab_bar
            .clone()
            .with_theme(Theme::from_name(self.config.theme));
        tracing::info!(theme = self.config.theme.as_str(), "theme changed");
        self.save_config(format!("Theme: {}", self.config.theme.as_str()));
    }

    fn save_config(&mut self, message: String) {
        if !self.persist_config {
            self.status = Some((message, false));
            return;
        }

        match self.config.save() {
            Ok(()) => self.status = Some((format!("{} (saved)", message), false)),
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "failed to save config");
                self.status = Some((format!("Save failed: {}", e), true));
            }
        }
    }
}

/// The tabs shown by the demo
fn demo_tabs(safe_area_bottom: u16) -> Vec<TabItemData> {
    let reserved = BAR_HEIGHT.saturating_add(safe_area_bottom);

    vec![
        page(
            "house",
            "Home",
            reserved,
            vec![
                Line::raw("Welcome to the tabbar demo."),
                Line::raw(""),
                Line::raw("Click a tab below, or press 1-4 to switch."),
                Line::raw("Press s to cycle the bar style and t to cycle the theme."),
            ],
        ),
        TabItemData::new(
            move |area, buf| {
                let now = Local::now();
                let lines = vec![
                    Line::raw(""),
                    Line::raw(now.format("%H:%M:%S").to_string()),
                    Line::raw(now.format("%A, %d %B %Y").to_string()),
                ];
                render_page("Clock", lines, Alignment::Center, reserved, area, buf);
            },
            "clock",
            "Clock",
        ),
        page(
            "star",
            "Favorites",
            reserved,
            vec![Line::raw("Nothing pinned yet.")],
        ),
        page(
            "person",
            "Profile",
            reserved,
            vec![Line::raw(format!(
                "User: {}",
                std::env::var("USER").unwrap_or_default()
            ))],
        ),
    ]
}

fn page(icon: &str, title: &'static str, reserved: u16, lines: Vec<Line<'static>>) -> TabItemData {
    TabItemData::new(
        move |area, buf| render_page(title, lines.clone(), Alignment::Left, reserved, area, buf),
        icon,
        title,
    )
}

/// Draw a bordered page above the rows the bar occupies
fn render_page(
    title: &str,
    lines: Vec<Line<'static>>,
    alignment: Alignment,
    reserved: u16,
    area: Rect,
    buf: &mut Buffer,
) {
    let height = area.height.saturating_sub(reserved);
    if height == 0 {
        return;
    }
    let page_area = Rect { height, ..area };
    let body_area = widgets::centered_rect(page_area.width.saturating_sub(2), height, page_area);

    Paragraph::new(lines)
        .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL))
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .render(body_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BarStyleName;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use tabbar::ThemeName;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default(), false)
    }

    #[test]
    fn test_starts_on_first_tab() {
        let app = app();
        assert_eq!(app.tab_bar.len(), 4);
        assert_eq!(app.tab_bar.selected_index(), 0);
        assert_eq!(app.tab_bar.safe_area(), Insets::bottom(1));
    }

    #[test]
    fn test_number_keys_tap_tabs() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('3')));
        assert_eq!(app.tab_bar.selected_index(), 2);

        // No fifth tab
        app.handle_key(press(KeyCode::Char('5')));
        assert_eq!(app.tab_bar.selected_index(), 2);
    }

    #[test]
    fn test_arrows_wrap() {
        let mut app = app();
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.tab_bar.selected_index(), 3);
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.tab_bar.selected_index(), 0);
        app.handle_key(press(KeyCode::Char('l')));
        assert_eq!(app.tab_bar.selected_index(), 1);
    }

    #[test]
    fn test_cycle_style_keeps_selection() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Char('s')));

        assert_eq!(app.config.bar_style, BarStyleName::Transparent);
        assert_eq!(app.tab_bar.selected_index(), 1);
        assert_eq!(app.status, Some(("Style: Transparent".to_string(), false)));
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.config.theme, ThemeName::Nord);
        assert_eq!(app.theme(), &Theme::nord());
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(press(KeyCode::Char('2')));
        assert_eq!(app.tab_bar.selected_index(), 0);
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.handle_key(press(KeyCode::Esc));
        assert!(!app.show_help);
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_after_render() {
        let mut app = app();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        app.tab_bar.render(area, &mut buf);

        let target = app.tab_bar.hit_areas()[3].rect;
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x,
            row: target.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.tab_bar.selected_index(), 3);
    }

    #[test]
    fn test_pages_leave_room_for_bar() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        render_page("Home", vec![Line::raw("hi")], Alignment::Left, 5, area, &mut buf);

        // Bottom border on row 6, rows below untouched
        assert_eq!(buf[(1, 6)].symbol(), "└");
        assert_eq!(buf[(2, 6)].symbol(), "─");
        assert_eq!(buf[(2, 7)].symbol(), " ");
    }
}

use std::io;
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};

use crate::config::Config;
use crate::session::SessionDriver;
use crate::ui::components::{
    render_key_hints, theme, HistoryPanel, KeyHintBarStyle, QuizPanel, Spinner, TextInputState,
};
use crate::view::{compose_history, compose_quiz};

const QUIZ_HINTS: &[(&str, &str)] = &[
    ("Enter", "check"),
    ("Tab", "convention"),
    ("^N", "new quiz"),
    ("^D", "history"),
    ("^Q", "quit"),
];

const HISTORY_HINTS: &[(&str, &str)] = &[
    ("+/-", "page size"),
    ("r", "refresh"),
    ("e", "export csv"),
    ("PgUp/PgDn", "scroll"),
    ("Esc", "close"),
];

/// Main application state
pub struct App {
    config: Config,
    driver: SessionDriver,
    /// Editing buffer for the proposed bid
    bid_input: TextInputState,
    spinner: Spinner,
    should_quit: bool,
    /// First deal shown in the history overlay
    history_scroll: usize,
}

impl App {
    pub fn new(config: Config, driver: SessionDriver) -> Self {
        Self {
            config,
            driver,
            bid_input: TextInputState::new(),
            spinner: Spinner::new(),
            should_quit: false,
            history_scroll: 0,
        }
    }

    pub fn driver(&self) -> &SessionDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut SessionDriver {
        &mut self.driver
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn bid_input(&self) -> &str {
        self.bid_input.value()
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.driver.start_new_quiz();
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(Duration::from_millis(100));

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = ticker.tick() => {
                    self.spinner.tick();
                }

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.handle_key_event(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },

                Some(completion) = self.driver.next_completion() => {
                    self.driver.apply(completion);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('n') => {
                    self.driver.close_history();
                    self.driver.start_new_quiz();
                    self.bid_input.clear();
                    return;
                }
                KeyCode::Char('d') => {
                    if self.driver.history().is_open() {
                        self.driver.close_history();
                    } else {
                        self.history_scroll = 0;
                        self.driver.open_history();
                    }
                    return;
                }
                _ => {}
            }
        }

        if self.driver.history().is_open() {
            self.handle_history_key(key);
        } else {
            self.handle_quiz_key(key);
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let page_size = self.driver.history().page_size();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.driver.close_history(),
            KeyCode::Char('r') => {
                self.history_scroll = 0;
                self.driver.refresh_history();
            }
            KeyCode::Char('e') => self.driver.export_history(),
            KeyCode::Char('+') | KeyCode::Right if page_size.next() != page_size => {
                self.history_scroll = 0;
                self.driver.set_page_size(page_size.next());
            }
            KeyCode::Char('-') | KeyCode::Left if page_size.prev() != page_size => {
                self.history_scroll = 0;
                self.driver.set_page_size(page_size.prev());
            }
            KeyCode::PageDown | KeyCode::Down => {
                let max = self.driver.history().deals().len().saturating_sub(1);
                self.history_scroll = (self.history_scroll + 1).min(max);
            }
            KeyCode::PageUp | KeyCode::Up => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.driver.submit_check();
                return;
            }
            KeyCode::Tab => {
                self.driver.cycle_convention(true);
                return;
            }
            KeyCode::BackTab => {
                self.driver.cycle_convention(false);
                return;
            }
            KeyCode::Esc => self.bid_input.clear(),
            KeyCode::Backspace => self.bid_input.delete_char(),
            KeyCode::Delete => self.bid_input.delete_forward(),
            KeyCode::Left => self.bid_input.move_left(),
            KeyCode::Right => self.bid_input.move_right(),
            KeyCode::Home => self.bid_input.move_start(),
            KeyCode::End => self.bid_input.move_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.bid_input.insert_char(c)
            }
            _ => return,
        }
        self.driver.set_proposed_bid(self.bid_input.value());
    }

    pub fn draw(&mut self, f: &mut Frame) {
        // The session clears the proposed bid on a new quiz
        if self.driver.quiz().proposed_bid() != self.bid_input.value() {
            self.bid_input.set(self.driver.quiz().proposed_bid());
        }

        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(5),    // quiz
                Constraint::Length(3), // bid input
                Constraint::Length(1), // key hints
            ])
            .split(area);

        let buf = f.buffer_mut();
        self.render_title(chunks[0], buf);

        let quiz = compose_quiz(self.driver.quiz(), self.config.display.show_hcp);
        QuizPanel::new(&quiz, &self.spinner).render(chunks[1], buf);

        self.render_bid_input(chunks[2], buf);

        let history = compose_history(self.driver.history());
        let hints = if history.open {
            HistoryPanel::new(&history, &self.spinner, self.history_scroll)
                .render(centered(chunks[1].union(chunks[2]), 90), buf);
            HISTORY_HINTS
        } else {
            QUIZ_HINTS
        };
        render_key_hints(chunks[3], buf, hints, KeyHintBarStyle::footer_bar());
    }

    fn render_title(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let line = Line::from(vec![
            Span::styled(" Bridge Bid Quiz", Style::default().fg(theme::TEXT_PRIMARY)),
            Span::styled(
                format!("  {}", self.config.server.base_url),
                Style::default().fg(theme::TEXT_FAINT),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_bid_input(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .title(Span::styled(" Your bid ", Style::default().fg(theme::TEXT_SECONDARY)));
        let inner = block.inner(area);
        block.render(area, buf);

        self.bid_input.render_with_placeholder(
            inner,
            buf,
            Style::default().fg(theme::TEXT_PRIMARY),
            "e.g. 1NT, 2H, PASS",
            Style::default().fg(theme::TEXT_FAINT),
        );
    }
}

/// Rect of `percent` width and height centered in `area`
fn centered(area: Rect, percent: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

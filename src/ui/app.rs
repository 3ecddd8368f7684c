//! Main TUI application state and logic

use crate::catalog::AlgorithmInfo;
use crate::config::PlaybackConfig;
use crate::error::PlaybackError;
use crate::playback::{Playback, PlaybackStatus};
use crate::snapshot::{Snapshot, Step};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Structure,
    Narration,
    Info,
}

impl FocusedPane {
    /// Cycle focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Structure => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Structure,
        }
    }
}

/// The main application state
pub struct App {
    pub playback: Playback<Step>,

    /// Reference card of the running algorithm; its id titles the structure pane
    pub info: AlgorithmInfo,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub structure_scroll: usize,
    pub narration_scroll: usize,
    pub info_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a refused action
    pub status_is_error: bool,
}

impl App {
    pub fn new(steps: Vec<Step>, info: AlgorithmInfo, config: PlaybackConfig) -> Self {
        let mut app = App {
            playback: Playback::new(steps, config),
            info,
            focused_pane: FocusedPane::Structure,
            structure_scroll: 0,
            narration_scroll: 0,
            info_scroll: 0,
            should_quit: false,
            status_message: String::new(),
            status_is_error: false,
        };
        app.describe_current();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.playback.tick(Instant::now()) {
                self.describe_current();
            }

            // Use poll with timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        super::panes::render_structure_pane(
            frame,
            columns[0],
            self.playback.current_step(),
            self.info.id,
            self.focused_pane == FocusedPane::Structure,
            &mut self.structure_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            side[0],
            self.playback.steps(),
            self.playback.current_index(),
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_info_pane(
            frame,
            side[1],
            &self.info,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &PlaybackStatus::from(&self.playback),
            self.status_is_error,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let count = c.to_digit(10).map_or(1, |n| n as usize);
                let result = self.playback.step_forward_by(count);
                self.after_move(result);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                let result = self.playback.step_backward();
                self.after_move(result);
            }
            KeyCode::Right => {
                let result = self.playback.step_forward();
                self.after_move(result);
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_sub(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
                FocusedPane::Info => {
                    self.info_scroll = self.info_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_add(1);
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
                FocusedPane::Info => {
                    self.info_scroll = self.info_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => match self.playback.toggle(Instant::now()) {
                Ok(()) if self.playback.is_playing() => self.set_status("Playing...", false),
                Ok(()) => self.describe_current(),
                Err(e) => self.set_status(format!("Cannot play: {}", e), true),
            },
            KeyCode::Enter => {
                self.playback.jump_to_end();
                self.after_move(Ok(()));
            }
            KeyCode::Backspace => {
                self.playback.reset();
                self.after_move(Ok(()));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.playback.faster();
                self.report_speed();
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.playback.slower();
                self.report_speed();
            }
            _ => {}
        }
    }

    fn after_move(&mut self, result: Result<(), PlaybackError>) {
        match result {
            Ok(()) => {
                self.narration_scroll = 0;
                self.describe_current();
            }
            Err(e) => self.set_status(format!("Cannot step: {}", e), true),
        }
    }

    fn report_speed(&mut self) {
        debug!(interval_ms = self.playback.interval_ms(), "playback speed changed");
        let message = format!(
            "Speed: {} ({} ms)",
            self.playback.speed_label(),
            self.playback.interval_ms()
        );
        self.set_status(message, false);
    }

    /// Show the operation tag of the step on screen
    fn describe_current(&mut self) {
        let message = match self.playback.current_step() {
            Some(step) => step.operation().to_string(),
            None => "No steps".to_string(),
        };
        self.set_status(message, false);
    }

    fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = message.into();
        self.status_is_error = is_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Algorithm;
    use crate::playback::PlaybackState;
    use crate::snapshot::{StackOp, StackStep};
    use crossterm::event::KeyModifiers;

    fn app(count: usize) -> App {
        let steps = (0..count)
            .map(|i| StackStep::new(&[i as i64], StackOp::Peek, format!("step {}", i)).into())
            .collect();
        App::new(steps, Algorithm::StackPeek.info(), PlaybackConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_move_the_cursor() {
        let mut app = app(3);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.current_index(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.current_index(), 1);
        assert!(!app.status_is_error);
    }

    #[test]
    fn stepping_past_the_end_reports_error() {
        let mut app = app(2);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        assert!(app.status_is_error);
        assert_eq!(app.status_message, "Cannot step: already at the last step");
    }

    #[test]
    fn digits_jump_forward() {
        let mut app = app(10);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.playback.current_index(), 4);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.playback.state(), PlaybackState::Stopped);
        assert_eq!(app.playback.current_index(), 0);
    }

    #[test]
    fn space_toggles_play() {
        let mut app = app(3);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.playback.is_playing());
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn speed_keys_adjust_interval() {
        let mut app = app(3);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.playback.interval_ms(), 400);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.playback.interval_ms(), 600);
    }

    #[test]
    fn tab_and_quit() {
        let mut app = app(1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Narration);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_through_the_info_pane() {
        let mut app = app(1);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Info);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.info_scroll, 1);
        assert_eq!(app.structure_scroll, 0);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Structure);
    }
}

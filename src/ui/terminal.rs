use crate::app::App;
use crate::pacing::DisplayPayload;
use crate::ui::view::{
    render_chunk_display, render_placeholder, render_progress_bar, render_status_line,
    render_word_display,
};
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::{Duration, Instant};

static PANIC_RESTORE: Once = Once::new();

/// Owns the terminal for the lifetime of the app: raw mode and the alternate
/// screen are entered in `new` and undone on drop. A panic hook restores the
/// terminal before the panic message prints, so a crash never leaves the
/// shell in raw mode.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        install_panic_restore();

        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(TuiManager { terminal })
    }

    /// Main loop: wait for a key or for the pacer's next deadline, whichever
    /// comes first, then drain due ticks and redraw. Frames are capped at
    /// roughly 60 per second.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let frame_budget = Duration::from_millis(1000 / 60);
        let mut last_frame = Instant::now();

        loop {
            if app.should_quit() {
                return Ok(());
            }

            let poll_timeout = app
                .time_until_tick()
                .map_or(frame_budget, |until| until.min(frame_budget));

            match event::poll(poll_timeout) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        if let KeyCode::Char(c) = key.code {
                            app.handle_keypress(c);
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => return Err(e),
            }

            // Deadline-based, so this is a no-op unless a tick is due
            app.advance();

            if last_frame.elapsed() >= frame_budget {
                self.render_frame(app)?;
                last_frame = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(45),
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            match &state.payload {
                Some(DisplayPayload::Focused(split)) => {
                    let word_area = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([
                            Constraint::Percentage(30),
                            Constraint::Min(10),
                            Constraint::Percentage(30),
                        ])
                        .split(rows[1])[1];
                    frame.render_widget(render_word_display(split), word_area);
                }
                Some(DisplayPayload::Plain(text)) => {
                    frame.render_widget(render_chunk_display(text), rows[1]);
                }
                None => {
                    frame.render_widget(render_placeholder(state.mode), rows[1]);
                }
            }

            frame.render_widget(render_progress_bar(state.progress), rows[3]);
            frame.render_widget(render_status_line(&state), rows[4]);
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Chains onto any existing panic hook rather than replacing it, and only
/// installs once no matter how many managers are created.
fn install_panic_restore() {
    PANIC_RESTORE.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            previous(panic_info);
        }));
    });
}

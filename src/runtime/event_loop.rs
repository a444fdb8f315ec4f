use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::config;
use crate::player::{Intent, MediaHandle, MediaNotice, PlayerView};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// When the visualizer bars were last re-rolled.
    pub last_visualizer: Instant,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            pending_gg: false,
            last_visualizer: Instant::now(),
        }
    }
}

/// Main terminal event loop: feeds media notices into the player, draws the
/// page and turns keys into intents. Returns `Ok(())` when quit is requested.
pub fn run<M: MediaHandle>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    view: &mut PlayerView<M>,
    app: &mut App,
    notices: &Receiver<MediaNotice>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let refresh = Duration::from_millis(settings.ui.visualizer_refresh_ms);
    let mut rng = rand::thread_rng();

    loop {
        // Notices are applied in delivery order.
        while let Ok(notice) = notices.try_recv() {
            view.notify(notice);
        }

        app.sync_cursor(view.state().current_index);

        if state.last_visualizer.elapsed() >= refresh {
            app.refresh_visualizer(view.state().is_playing, &mut rng);
            state.last_visualizer = Instant::now();
        }

        terminal.draw(|f| {
            ui::draw(
                f,
                view.state(),
                view.playlist(),
                app,
                &settings.ui,
                &settings.controls,
            )
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, view, app, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub fn handle_key_event<M: MediaHandle>(
    key: KeyEvent,
    settings: &config::Settings,
    view: &mut PlayerView<M>,
    app: &mut App,
    state: &mut EventLoopState,
) -> bool {
    let was_gg_pending = state.pending_gg;
    state.pending_gg = false;

    let intent = match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('g') => {
            if was_gg_pending {
                app.follow_current_off();
                app.top();
            } else {
                state.pending_gg = true;
            }
            None
        }
        KeyCode::Char('G') => {
            app.follow_current_off();
            app.bottom();
            None
        }
        KeyCode::Char('j') => {
            app.follow_current_off();
            app.next();
            None
        }
        KeyCode::Char('k') => {
            app.follow_current_off();
            app.prev();
            None
        }
        KeyCode::Char('K') => {
            app.toggle_metadata_window();
            None
        }
        KeyCode::Enter => {
            app.follow_current_on();
            Some(Intent::SelectTrack(app.cursor))
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Intent::TogglePlay),
        KeyCode::Char('l') => {
            app.follow_current_on();
            Some(Intent::NextTrack)
        }
        KeyCode::Char('h') => {
            app.follow_current_on();
            Some(Intent::PreviousTrack)
        }
        KeyCode::Char('L') => {
            let elapsed = view.state().elapsed.as_secs_f64();
            Some(Intent::Seek(elapsed + settings.controls.seek_seconds as f64))
        }
        KeyCode::Char('H') => {
            let elapsed = view.state().elapsed.as_secs_f64();
            Some(Intent::Seek(
                (elapsed - settings.controls.seek_seconds as f64).max(0.0),
            ))
        }
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Intent::SetVolume(
            i32::from(view.state().volume_percent) + i32::from(settings.controls.volume_step),
        )),
        KeyCode::Char('-') => Some(Intent::SetVolume(
            i32::from(view.state().volume_percent) - i32::from(settings.controls.volume_step),
        )),
        KeyCode::Char('s') => Some(Intent::ToggleShuffle),
        KeyCode::Char('r') => Some(Intent::CycleRepeat),
        KeyCode::Char('f') => Some(Intent::ToggleLiked),
        _ => None,
    };

    if let Some(intent) = intent {
        debug!(?intent, "key intent");
        view.dispatch(intent);
    }

    false
}

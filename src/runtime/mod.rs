use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::logging;
use crate::media::RodioMedia;
use crate::player::{MediaNotice, PlayerView};
use crate::playlist::{Playlist, builtin_tracks};

mod event_loop;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_error) = settings::load_settings();

    // The guard flushes the log writer; keep it until we return.
    let _log_guard = match logging::init(&settings.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("playdeck: logging disabled: {e}");
            None
        }
    };
    if let Some(e) = config_error {
        warn!(error = %e, "could not use config, falling back to defaults");
    }

    let playlist = Playlist::new(builtin_tracks())?;
    info!(tracks = playlist.len(), "starting playdeck");

    let (notice_tx, notice_rx) = mpsc::channel::<MediaNotice>();
    let media = RodioMedia::new(&settings.media, notice_tx);

    let initial = startup::initial_state(&settings, &playlist);
    let mut view = PlayerView::new(playlist, media, initial);
    view.start();
    info!(track = %view.current_track().display(), "first track queued");

    let mut app = App::new(view.playlist().len(), settings.ui.visualizer_bars);
    app.follow_current = settings.ui.follow_current;
    app.set_cursor(view.state().current_index);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(settings.ui.window_title.as_str())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();
        event_loop::run(
            &mut terminal,
            &settings,
            &mut view,
            &mut app,
            &notice_rx,
            &mut state,
        )
    })();

    view.media()
        .quit_softly(Duration::from_millis(settings.media.quit_fade_out_ms));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        warn!(error = %e, "event loop failed");
    }
    info!("playdeck stopped");
    run_result
}

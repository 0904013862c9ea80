use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;

mod event_loop;
mod keymap;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    startup::init_logging(&settings);
    if let Some(warning) = config_warning {
        eprintln!("aria: {warning}");
        log::warn!("{warning}");
    }

    // An optional playlist file may be given as the first argument.
    let cli_file = env::args_os().nth(1).map(PathBuf::from);

    let playlist = match startup::build_playlist(&settings.playlist, cli_file) {
        Ok(p) => p,
        Err(e) => {
            log::error!("cannot start: {e}");
            return Err(e.into());
        }
    };
    log::info!("starting with {} tracks", playlist.len());

    let mut app = App::new(playlist, &settings.visualizer);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.activate_view();

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    // Stop the ticker before restoring the terminal, whatever the loop returned.
    app.deactivate_view();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

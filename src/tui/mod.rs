pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::config::Config;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>, config: Arc<Config>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, config).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, config: Arc<Config>) -> Result<()> {
    let mut tui_app = TuiApp::new(config.display.timezone);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Dropped on exit, which aborts a load still in flight.
    let (mut loader, mut updates) = ctx.loader();
    loader.load();

    loop {
        if let Some(earthquakes) = updates.take_update() {
            tui_app.replace_earthquakes(earthquakes);
        }
        tui_app.is_loading = loader.is_loading();

        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match config.keybindings.get_action(&key) {
                Action::Quit => {
                    tui_app.should_quit = true;
                }
                Action::MoveUp => {
                    tui_app.move_up();
                }
                Action::MoveDown => {
                    tui_app.move_down();
                }
                Action::NextPage => {
                    tui_app.next_page();
                }
                Action::PrevPage => {
                    tui_app.prev_page();
                }
                Action::OpenInBrowser => {
                    if let Some(quake) = tui_app.selected_earthquake() {
                        let url = quake.url.clone();
                        match open::that(&url) {
                            Ok(()) => tui_app.set_status(format!("Opened {}", url)),
                            Err(e) => {
                                tracing::warn!("Failed to open {}: {}", url, e);
                                tui_app.set_status(format!("Failed to open browser: {}", e));
                            }
                        }
                    }
                }
                Action::Refresh => {
                    if loader.load() {
                        tui_app.clear_status();
                    }
                }
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

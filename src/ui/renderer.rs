use crate::config::Config;
use crate::logger::Logger;
use crate::store::Store;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType, Page};
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the dashboard until the user quits
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    let start = Page::from_name(&config.ui.default_page).unwrap_or_default();
    let store = Store::seeded(Local::now(), config.kanban.columns.clone());
    let context = AppContext::new(&config, logger);
    let mut app = AppComponent::new(context, store, start);
    let mut event_handler = EventHandler::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                // Only redraw when a toast went away
                needs_render = app.on_tick();
            }
            EventType::Render => needs_render = true,
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    log::info!("dashboard closed");
    Ok(())
}

use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{Action, ActionRx};
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    action_rx: &mut ActionRx,
) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|f| ui::render(f, app))?;
            app.mark_drawn();
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_view_key(key, app),
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

fn run_action(action: Action, app: &mut App) {
    match action {
        Action::Tick { generation } => app.tick(generation),
    }
}

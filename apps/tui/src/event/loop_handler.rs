use color_eyre::{eyre::eyre, Result};
use crossterm::event::{self, Event, KeyEventKind};
use digest_core::markup::LOAD_ERROR_TITLE;
use digest_core::{load_dashboard, Dashboard, LoadState};
use std::fmt::Write as _;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::source::Transport;
use crate::terminal::DigestTerminal;
use crate::ui;

// Frame tick while waiting on input or the load (ms)
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, transport: &Transport, json: bool) -> Result<()> {
    app.begin_loading();
    let sources = app.sources.clone();
    let result = load_dashboard(&sources, |location| transport.fetch(location.clone())).await;
    app.finish_load(result);

    let Some(dashboard) = app.dashboard.as_ref() else {
        return Err(eyre!(
            "{LOAD_ERROR_TITLE}: none of the configured locations could be loaded (rerun with --debug for details)"
        ));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
    } else {
        print!("{}", render_headless_text(dashboard));
    }

    Ok(())
}

pub fn render_headless_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Macro Themes ({})", dashboard.themes.len());
    let _ = writeln!(out, "================");
    for theme in &dashboard.themes {
        let _ = writeln!(out, "- {}", theme.title);
        if !theme.summary.is_empty() {
            let _ = writeln!(out, "  {}", theme.summary);
        }
        for item in &theme.evidence {
            if item.source.is_empty() {
                let _ = writeln!(out, "  > {}", item.snippet);
            } else {
                let _ = writeln!(out, "  > {} [{}]", item.snippet, item.source);
            }
        }
    }

    let _ = writeln!(out, "\nActive Companies ({})", dashboard.companies.len());
    let _ = writeln!(out, "====================");
    for company in &dashboard.companies {
        let _ = writeln!(
            out,
            "- {} | {} | {}",
            company.name, company.ticker, company.recommendation.text
        );
        for bullet in &company.updates {
            let _ = writeln!(out, "  • {bullet}");
        }
    }

    if let Some(note) = &dashboard.note {
        let note = note
            .as_str()
            .map_or_else(|| note.to_string(), str::to_string);
        let _ = writeln!(out, "\nNote: {note}");
    }

    out
}

/// Run the main application event loop. The load is polled alongside the
/// frame tick so the UI stays responsive while it is in flight.
pub async fn run(terminal: &mut DigestTerminal, app: &mut App, transport: &Transport) -> Result<()> {
    let sources = app.sources.clone();
    let load = load_dashboard(&sources, |location| transport.fetch(location.clone()));
    tokio::pin!(load);
    app.begin_loading();

    while app.running {
        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        tokio::select! {
            result = &mut load, if app.load_state == LoadState::Loading => app.finish_load(result),
            () = tokio::time::sleep(FRAME_INTERVAL) => app.on_tick(),
        }

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                // Resize and other events are picked up by the next draw
                _ => {}
            }
        }
    }

    Ok(())
}

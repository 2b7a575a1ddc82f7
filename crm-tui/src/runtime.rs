//! Terminal event loop.
//!
//! Waits on terminal input and on the app's next timer deadline (end of a
//! simulated load, toast expiry), and redraws only when something changed.

use std::time::Instant;

use crossterm::event::EventStream;
use crm_ui::{Terminal, convert_event};
use futures::StreamExt;
use log::{debug, error, info, trace};
use tokio::time::sleep_until;

use crate::app::App;
use crate::error::AppError;

/// Sleep until `deadline`, or forever when there is none.
///
/// Used as a conditional branch in `tokio::select!`.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Run until the user quits. The terminal is restored before returning.
pub async fn run(mut app: App) -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    let mut needs_render = true;
    info!("event loop started");

    loop {
        if app.tick(Instant::now()) {
            needs_render = true;
        }
        if needs_render {
            terminal.draw(|buf| app.render(buf))?;
            needs_render = false;
        }
        if app.should_quit() {
            info!("quit requested");
            break;
        }

        let deadline = app.next_deadline();
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(crossterm_event)) => {
                    trace!("crossterm event: {:?}", crossterm_event);
                    if let Some(event) = convert_event(crossterm_event) {
                        app.handle_event(event, Instant::now());
                        needs_render = true;
                    }
                }
                Some(Err(e)) => error!("event stream error: {}", e),
                None => {
                    info!("event stream closed");
                    break;
                }
            },

            _ = sleep_until_optional(deadline) => {
                debug!("deadline reached");
            }
        }
    }

    Ok(())
}

//! The console event loop: read a line, dispatch it, poll, redraw.

use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};

use tracing::{debug, info, warn};

use tabdeck_common::Action;

use super::core::TabdeckApp;
use super::input::parse_command;
use super::types::POLL_INTERVAL;

impl TabdeckApp {
    /// Drive the app from `lines` until `quit` or the input closes,
    /// writing everything the user should see to `out`.
    pub fn run(&mut self, lines: Receiver<String>, out: &mut impl Write) -> io::Result<()> {
        info!("entering event loop");
        self.sync_if_changed();
        self.flush(out)?;

        while !self.should_exit {
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => self.handle_line(&line, out)?,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    info!("input closed");
                    break;
                }
            }
            self.poll();
            self.flush(out)?;
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        if self.echo_commands && !line.trim().is_empty() {
            writeln!(out, "> {}", line.trim())?;
        }
        match parse_command(line, self.config.counter.async_amount) {
            Ok(Action::None) => {}
            Ok(action) => {
                debug!(action = action.label(), "command");
                self.dispatch(action);
            }
            Err(e) => {
                warn!("{e}");
                self.messages.push(e.to_string());
            }
        }
        Ok(())
    }

    /// Write pending messages, then the dock if it changed.
    fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        for message in self.messages.drain(..) {
            writeln!(out, "{message}")?;
        }
        if self.needs_redraw {
            writeln!(out, "{}", self.render())?;
            self.needs_redraw = false;
        }
        out.flush()
    }
}

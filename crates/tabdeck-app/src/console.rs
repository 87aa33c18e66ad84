//! Line input for the event loop, read on its own thread.

use std::io::{self, BufRead};
use std::sync::mpsc;

/// Read `reader` line by line on a background thread. The receiver
/// disconnects at end of input.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("tabdeck-input".into())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("input read failed: {e}");
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}

//! Dashboard event source.
//!
//! A background thread turns terminal input into [`Event`]s and emits
//! [`Event::Sample`] once per refresh interval. Key presses do not delay the
//! next sample: the poll timeout is whatever is left of the current interval.

use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

#[derive(Debug)]
pub enum Event {
    /// Refresh interval elapsed; meters should be sampled.
    Sample,
    Key(KeyEvent),
    /// Terminal size changed; the next draw lays out again.
    Resize,
}

/// How long to wait for input before the next sample is due.
fn poll_timeout(interval: Duration, since_sample: Duration) -> Duration {
    interval.saturating_sub(since_sample)
}

/// Receiving end of the dashboard's event thread.
pub struct EventHandler {
    rx: Receiver<Event>,
}

impl EventHandler {
    /// Spawns the event thread. It stops when the handler is dropped or the
    /// terminal can no longer be polled, which closes the channel.
    pub fn new(interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_sample = Instant::now();
            loop {
                let timeout = poll_timeout(interval, last_sample.elapsed());
                let input = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(..)) => Some(Event::Resize),
                        _ => None,
                    },
                    Ok(false) => None,
                    Err(_) => break,
                };

                if let Some(input) = input {
                    if tx.send(input).is_err() {
                        break;
                    }
                }

                if last_sample.elapsed() >= interval {
                    last_sample = Instant::now();
                    if tx.send(Event::Sample).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx }
    }

    /// Blocks until the next event. Fails once the event thread has stopped.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}

use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::schedule::{Registration, Scheduler};

/// Delay between two typed characters.
pub const TYPEWRITER_PERIOD: Duration = Duration::from_millis(50);

/// A prefix of `source` that grows by one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    source: Cow<'static, str>,
    // byte length of the visible prefix, always on a char boundary
    end: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
            end: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.source[..self.end]
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_done(&self) -> bool {
        self.end == self.source.len()
    }

    /// Reveals the next character and returns the new prefix, or `None` once
    /// the whole source is visible.
    pub fn tick(&mut self) -> Option<&str> {
        let next = self.source[self.end..].chars().next()?;
        self.end += next.len_utf8();
        Some(self.text())
    }
}

/// A [`Typewriter`] driven by a host interval.
///
/// The interval is released in the same tick that shows the last character,
/// or by [`TypewriterTask::cancel`] if the view goes away first. Either way
/// it is released exactly once.
pub struct TypewriterTask<S: Scheduler> {
    interval: Arc<Registration<S::Handle>>,
}

impl<S: Scheduler> TypewriterTask<S> {
    pub fn start(
        scheduler: Arc<S>,
        source: impl Into<Cow<'static, str>>,
        period: Duration,
        on_text: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        let typewriter = Arc::new(Mutex::new(Typewriter::new(source)));
        let interval = Arc::new(Registration::<S::Handle>::empty({
            let scheduler = scheduler.clone();
            move |handle| scheduler.clear_interval(handle)
        }));

        let is_empty = typewriter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_done();
        if is_empty {
            return Self { interval };
        }

        let tick = {
            let interval = Arc::downgrade(&interval);
            move || {
                let (text, done) = {
                    let mut tw = typewriter.lock().unwrap_or_else(PoisonError::into_inner);
                    let text = tw.tick().map(str::to_string);
                    (text, tw.is_done())
                };
                if let Some(text) = text {
                    on_text(text);
                }
                if done && interval.upgrade().is_some_and(|i| i.cancel()) {
                    log::debug!("typewriter finished");
                }
            }
        };
        match scheduler.set_interval(period, Arc::new(tick)) {
            Some(handle) => interval.fill(handle),
            None => log::warn!("typewriter interval was refused by the host"),
        }
        Self { interval }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_active()
    }

    /// Stops the interval if it is still running.
    pub fn cancel(&self) -> bool {
        self.interval.cancel()
    }
}

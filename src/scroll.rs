use std::sync::{Arc, Mutex, PoisonError};

use crate::motion::{Spring, SpringConfig};
use crate::schedule::{Registration, ScrollSample, ScrollSource};

/// Offset (px) past which the back to top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

impl ScrollSample {
    /// How far down the page is, in `[0, 1]`. A page that cannot scroll
    /// reports 0.
    pub fn ratio(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if range.is_nan() || range <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }

    pub fn past_threshold(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }
}

/// What one scroll event changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub past_threshold: bool,
    pub raw_ratio: f64,
    /// The smoothed value needs animation frames to catch up.
    pub needs_frames: bool,
}

/// Scroll derived state: the threshold flag and a smoothed progress value.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    past_threshold: bool,
    raw_ratio: f64,
    spring: Spring,
}

impl ScrollTracker {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            past_threshold: false,
            raw_ratio: 0.0,
            spring: Spring::new(config, 0.0),
        }
    }

    /// Applies a scroll sample. Only the latest sample counts.
    pub fn observe(&mut self, sample: ScrollSample) -> ScrollUpdate {
        self.past_threshold = sample.past_threshold();
        self.raw_ratio = sample.ratio();
        self.spring.set_target(self.raw_ratio);
        ScrollUpdate {
            past_threshold: self.past_threshold,
            raw_ratio: self.raw_ratio,
            needs_frames: !self.spring.is_at_rest(),
        }
    }

    /// Advances smoothing by `dt` seconds; `None` once settled.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        self.spring.step(dt)
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn raw_ratio(&self) -> f64 {
        self.raw_ratio
    }

    pub fn progress(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}

/// Keeps a [`ScrollTracker`] fed from a [`ScrollSource`] until cancelled.
pub struct ScrollObserver<W: ScrollSource> {
    tracker: Arc<Mutex<ScrollTracker>>,
    subscription: Registration<W::Handle>,
}

impl<W: ScrollSource> ScrollObserver<W> {
    /// Subscribes and applies the current position right away, so a page
    /// restored mid-scroll starts with the right state.
    pub fn subscribe(
        source: Arc<W>,
        config: SpringConfig,
        on_update: impl Fn(ScrollUpdate) + Send + Sync + 'static,
    ) -> Self {
        let tracker = Arc::new(Mutex::new(ScrollTracker::new(config)));
        let on_update = Arc::new(on_update);

        let initial = lock(&tracker).observe(source.sample());
        on_update(initial);

        let listener = {
            let tracker = tracker.clone();
            let on_update = on_update.clone();
            move |sample: ScrollSample| {
                let update = lock(&tracker).observe(sample);
                on_update(update);
            }
        };
        let handle = source.subscribe(Arc::new(listener));
        let subscription = Registration::new(handle, move |h| source.unsubscribe(h));
        Self {
            tracker,
            subscription,
        }
    }

    pub fn tracker(&self) -> Arc<Mutex<ScrollTracker>> {
        self.tracker.clone()
    }

    /// Advances the shared tracker; see [`ScrollTracker::advance`].
    pub fn advance(&self, dt: f64) -> Option<f64> {
        lock(&self.tracker).advance(dt)
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn cancel(&self) -> bool {
        self.subscription.cancel()
    }
}

fn lock(tracker: &Mutex<ScrollTracker>) -> std::sync::MutexGuard<'_, ScrollTracker> {
    tracker.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Seams between page logic and the host event loop.
//!
//! The browser hands out timers and scroll notifications; page logic only
//! sees these traits, so lifecycle guarantees (cancel exactly once, nothing
//! fires after teardown) hold for any host and can be checked with the manual
//! doubles in [`testing`].

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub type Tick = Arc<dyn Fn() + Send + Sync>;

/// A host that can run a callback on a fixed period.
pub trait Scheduler: Send + Sync + 'static {
    type Handle: Send + 'static;

    /// Starts a repeating callback. `None` means the host refused.
    fn set_interval(&self, period: Duration, tick: Tick) -> Option<Self::Handle>;

    fn clear_interval(&self, handle: Self::Handle);
}

/// One sample of the window's scroll geometry, in CSS px.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

pub type ScrollListener = Arc<dyn Fn(ScrollSample) + Send + Sync>;

/// A host that reports scroll movement.
pub trait ScrollSource: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn subscribe(&self, listener: ScrollListener) -> Self::Handle;

    fn unsubscribe(&self, handle: Self::Handle);

    /// Current geometry, read without waiting for an event.
    fn sample(&self) -> ScrollSample;
}

/// A live host registration that is released at most once.
pub struct Registration<H: Send + 'static> {
    handle: Mutex<Option<H>>,
    release: Box<dyn Fn(H) + Send + Sync>,
}

impl<H: Send + 'static> Registration<H> {
    pub fn new(handle: H, release: impl Fn(H) + Send + Sync + 'static) -> Self {
        Self {
            handle: Mutex::new(Some(handle)),
            release: Box::new(release),
        }
    }

    /// A registration the host refused; cancelling it is a no-op.
    pub fn empty(release: impl Fn(H) + Send + Sync + 'static) -> Self {
        Self {
            handle: Mutex::new(None),
            release: Box::new(release),
        }
    }

    pub fn fill(&self, handle: H) {
        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(handle);
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Releases the handle. Returns `false` if it was already released.
    pub fn cancel(&self) -> bool {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match handle {
            Some(h) => {
                (self.release)(h);
                true
            }
            None => false,
        }
    }
}

impl<H: Send + 'static> Drop for Registration<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    struct Slot<T> {
        id: usize,
        callback: Option<T>,
    }

    fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
        m.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Interval host driven by hand: ticks fire only from [`ManualScheduler::fire`].
    #[derive(Default)]
    pub struct ManualScheduler {
        slots: Mutex<Vec<Slot<Tick>>>,
        periods: Mutex<Vec<Duration>>,
        cleared: Mutex<Vec<usize>>,
    }

    impl ManualScheduler {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Fires every live interval once, in registration order.
        /// Returns how many callbacks ran.
        pub fn fire(&self) -> usize {
            let ids = lock(&self.slots).iter().map(|s| s.id).collect::<Vec<_>>();
            let mut ran = 0;
            for id in ids {
                // re-check each slot, an earlier tick may have cleared it
                let tick = lock(&self.slots)
                    .iter()
                    .find(|s| s.id == id)
                    .and_then(|s| s.callback.clone());
                if let Some(tick) = tick {
                    tick();
                    ran += 1;
                }
            }
            ran
        }

        pub fn active(&self) -> usize {
            lock(&self.slots)
                .iter()
                .filter(|s| s.callback.is_some())
                .count()
        }

        pub fn started(&self) -> usize {
            lock(&self.slots).len()
        }

        pub fn cleared(&self) -> Vec<usize> {
            lock(&self.cleared).clone()
        }

        pub fn periods(&self) -> Vec<Duration> {
            lock(&self.periods).clone()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = usize;

        fn set_interval(&self, period: Duration, tick: Tick) -> Option<usize> {
            let mut slots = lock(&self.slots);
            let id = slots.len();
            slots.push(Slot {
                id,
                callback: Some(tick),
            });
            lock(&self.periods).push(period);
            Some(id)
        }

        fn clear_interval(&self, handle: usize) {
            lock(&self.cleared).push(handle);
            if let Some(slot) = lock(&self.slots).iter_mut().find(|s| s.id == handle) {
                slot.callback = None;
            }
        }
    }

    /// Scroll host driven by hand through [`ManualScrollSource::scroll_to`].
    #[derive(Default)]
    pub struct ManualScrollSource {
        slots: Mutex<Vec<Slot<ScrollListener>>>,
        current: Mutex<ScrollSample>,
        unsubscribed: Mutex<Vec<usize>>,
    }

    impl ManualScrollSource {
        pub fn new(scroll_height: f64, viewport_height: f64) -> Arc<Self> {
            let source = Self::default();
            *lock(&source.current) = ScrollSample {
                offset: 0.0,
                scroll_height,
                viewport_height,
            };
            Arc::new(source)
        }

        /// Moves the page and notifies live listeners. Returns how many ran.
        pub fn scroll_to(&self, offset: f64) -> usize {
            let sample = {
                let mut current = lock(&self.current);
                current.offset = offset;
                *current
            };
            let listeners = lock(&self.slots)
                .iter()
                .filter_map(|s| s.callback.clone())
                .collect::<Vec<_>>();
            for listener in &listeners {
                listener(sample);
            }
            listeners.len()
        }

        pub fn listeners(&self) -> usize {
            lock(&self.slots)
                .iter()
                .filter(|s| s.callback.is_some())
                .count()
        }

        pub fn unsubscribed(&self) -> Vec<usize> {
            lock(&self.unsubscribed).clone()
        }
    }

    impl ScrollSource for ManualScrollSource {
        type Handle = usize;

        fn subscribe(&self, listener: ScrollListener) -> usize {
            let mut slots = lock(&self.slots);
            let id = slots.len();
            slots.push(Slot {
                id,
                callback: Some(listener),
            });
            id
        }

        fn unsubscribe(&self, handle: usize) {
            lock(&self.unsubscribed).push(handle);
            if let Some(slot) = lock(&self.slots).iter_mut().find(|s| s.id == handle) {
                slot.callback = None;
            }
        }

        fn sample(&self) -> ScrollSample {
            *lock(&self.current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_registration_cancels_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let reg = {
            let released = released.clone();
            Registration::new(7usize, move |h| {
                assert_eq!(h, 7);
                released.fetch_add(1, Ordering::SeqCst);
            })
        };
        assert!(reg.is_active());
        assert!(reg.cancel());
        assert!(!reg.cancel());
        assert!(!reg.is_active());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_registration_is_inert() {
        let reg = Registration::<usize>::empty(|_| panic!("nothing to release"));
        assert!(!reg.is_active());
        assert!(!reg.cancel());
    }

    #[test]
    fn test_manual_scheduler_stops_cleared_ticks() {
        let scheduler = ManualScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let handle = {
            let count = count.clone();
            scheduler.set_interval(
                Duration::from_millis(10),
                Arc::new(move || {
                    count.fetch_add(1, Ordering::SeqCst);
                }),
            )
        };
        assert_eq!(scheduler.fire(), 1);
        scheduler.clear_interval(handle.expect("manual scheduler never refuses"));
        assert_eq!(scheduler.fire(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_manual_scroll_source_delivers_to_live_listeners() {
        let source = ManualScrollSource::new(2000.0, 1000.0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handle = {
            let seen = seen.clone();
            source.subscribe(Arc::new(move |s: ScrollSample| {
                seen.lock().expect("test lock").push(s.offset)
            }))
        };
        assert_eq!(source.scroll_to(10.0), 1);
        source.unsubscribe(handle);
        assert_eq!(source.scroll_to(20.0), 0);
        assert_eq!(*seen.lock().expect("test lock"), vec![10.0]);
        assert_eq!(source.sample().offset, 20.0);
    }
}

use std::time::Duration;

use leptos::{ev, prelude::*};

use crate::schedule::{Scheduler, ScrollListener, ScrollSample, ScrollSource, Tick};

/// `setInterval` on the window.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = IntervalHandle;

    fn set_interval(&self, period: Duration, tick: Tick) -> Option<IntervalHandle> {
        set_interval_with_handle(move || tick(), period)
            .inspect_err(|e| log::warn!("setInterval failed: {e:?}"))
            .ok()
    }

    fn clear_interval(&self, handle: IntervalHandle) {
        handle.clear();
    }
}

/// The window's `scroll` event.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Handle = WindowListenerHandle;

    fn subscribe(&self, listener: ScrollListener) -> WindowListenerHandle {
        window_event_listener(ev::scroll, move |_| listener(read_sample()))
    }

    fn unsubscribe(&self, handle: WindowListenerHandle) {
        handle.remove();
    }

    fn sample(&self) -> ScrollSample {
        read_sample()
    }
}

fn read_sample() -> ScrollSample {
    let window = window();
    let offset = window.scroll_y().unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    ScrollSample {
        offset,
        scroll_height,
        viewport_height,
    }
}

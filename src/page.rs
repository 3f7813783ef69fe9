use std::sync::Arc;

use crate::content::PHILOSOPHY;
use crate::motion::SCROLL_SPRING;
use crate::schedule::{Scheduler, ScrollSource};
use crate::scroll::{ScrollObserver, ScrollUpdate};
use crate::typewriter::{TypewriterTask, TYPEWRITER_PERIOD};

/// Host resources held by one mounted page: the scroll subscription and the
/// hero typewriter interval.
pub struct PageEffects<S: Scheduler, W: ScrollSource> {
    scroll: ScrollObserver<W>,
    typewriter: TypewriterTask<S>,
}

impl<S: Scheduler, W: ScrollSource> PageEffects<S, W> {
    pub fn start(
        scheduler: Arc<S>,
        source: Arc<W>,
        on_text: impl Fn(String) + Send + Sync + 'static,
        on_scroll: impl Fn(ScrollUpdate) + Send + Sync + 'static,
    ) -> Self {
        let scroll = ScrollObserver::subscribe(source, SCROLL_SPRING, on_scroll);
        let typewriter = TypewriterTask::start(scheduler, PHILOSOPHY, TYPEWRITER_PERIOD, on_text);
        Self { scroll, typewriter }
    }

    pub fn scroll(&self) -> &ScrollObserver<W> {
        &self.scroll
    }

    pub fn typewriter(&self) -> &TypewriterTask<S> {
        &self.typewriter
    }

    /// Releases both host resources. Safe to call more than once; each is
    /// released a single time however the page ended.
    pub fn teardown(&self) {
        let unsubscribed = self.scroll.cancel();
        let stopped = self.typewriter.cancel();
        log::debug!("page teardown: scroll released {unsubscribed}, typewriter stopped {stopped}");
    }
}

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{fade_in_up, slide_in, RevealLatch};

// share of the element that must be on screen
const VISIBLE_THRESHOLD: f64 = 0.1;

/// Whether the closest enclosing [`RevealGroup`] has been seen.
#[derive(Debug, Clone, Copy)]
pub struct Revealed(pub ReadSignal<bool>);

pub fn use_revealed() -> Signal<bool> {
    match use_context::<Revealed>() {
        Some(Revealed(r)) => r.into(),
        None => Signal::stored(true),
    }
}

/// Wraps a block that fades in the first time it scrolls into view.
///
/// `margin` shrinks the viewport for the visibility test, like the CSS
/// `rootMargin`. With `immediate` the group reveals on mount instead.
#[component]
pub fn RevealGroup(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(optional)] immediate: bool,
    #[prop(into, default = "-100px".to_string())] margin: String,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    provide_context(Revealed(revealed));

    if immediate {
        Effect::new(move |_| set_revealed.set(true));
    } else {
        let latch = StoredValue::new(RevealLatch::new());
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let visible = entries.iter().any(|e| e.is_intersecting());
                let mut fired = false;
                latch.update_value(|l| fired = l.observe(visible));
                if fired {
                    set_revealed.set(true);
                }
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![VISIBLE_THRESHOLD])
                .root_margin(margin),
        );
        // each group reveals once per page load
        Effect::watch(
            move || revealed.get(),
            move |revealed, _, _| {
                if *revealed {
                    log::debug!("section revealed");
                    stop();
                }
            },
            false,
        );
    }

    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

/// The `index`th staggered child of a [`RevealGroup`].
#[component]
pub fn FadeInUp(
    children: Children,
    #[prop(optional)] index: usize,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let revealed = use_revealed();
    view! {
        <div class=class style=move || fade_in_up(index, revealed.get())>
            {children()}
        </div>
    }
}

/// A badge sliding in from the left once its group is revealed.
#[component]
pub fn SlideIn(
    children: Children,
    index: usize,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let revealed = use_revealed();
    view! {
        <span class=class style=move || slide_in(index, revealed.get())>
            {children()}
        </span>
    }
}

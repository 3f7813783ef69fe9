use leptos::prelude::*;

use crate::content::Icon;

use super::icons::SvgIcon;
use super::{ScrollState, ThemeState};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    view! {
        <button
            class="fixed top-8 right-8 z-50 p-3 rounded-full transition-all duration-300 hover:scale-110 text-[var(--accent)] bg-[var(--card-bg)] animate-pop-in"
            style=move || format!("box-shadow: {};", theme.get().control_shadow())
            aria-label=move || theme.get().label()
            on:click=move |_| theme.toggle()
        >
            {move || {
                let icon = if theme.get().is_dark() { Icon::Sun } else { Icon::Moon };
                view! { <SvgIcon icon /> }
            }}
        </button>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let ScrollState { past_threshold, .. } = expect_context::<ScrollState>();
    view! {
        <button
            class=move || {
                let base = "fixed bottom-8 right-8 z-50 p-3 rounded-full transition-all duration-300 hover:scale-110 text-white bg-[var(--accent)] shadow-[0_4px_20px_rgba(106,103,206,0.3)]";
                if past_threshold.get() {
                    base.to_string()
                } else {
                    format!("{base} opacity-0 scale-75 pointer-events-none")
                }
            }
            aria-label="Back to top"
            aria-hidden=move || (!past_threshold.get()).to_string()
            // smooth scrolling comes from `scroll-behavior` in input.css
            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
        >
            <SvgIcon icon=Icon::ArrowUp />
        </button>
    }
}

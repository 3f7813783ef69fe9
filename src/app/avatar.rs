use leptos::prelude::*;

use super::ThemeState;

/// Geometric placeholder portrait.
#[component]
pub fn Avatar() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    view! {
        <div
            class="w-32 h-32 rounded-full overflow-hidden border-[3px] border-[var(--accent)] transition-transform duration-300 hover:scale-105"
            style=move || {
                let glow = if theme.get().is_dark() { 0.3 } else { 0.2 };
                format!("box-shadow: 0 8px 30px rgba(106, 103, 206, {glow});")
            }
        >
            <svg viewBox="0 0 100 100" class="w-full h-full bg-[var(--card-bg)]" aria-hidden="true">
                <circle cx="50" cy="35" r="18" opacity="0.8" style="fill: var(--accent)" />
                <path
                    d="M 30 65 Q 30 50 50 50 Q 70 50 70 65 L 70 100 L 30 100 Z"
                    opacity="0.8"
                    style="fill: var(--accent)"
                />
            </svg>
        </div>
    }
}

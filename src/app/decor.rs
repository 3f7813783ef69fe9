use leptos::prelude::*;

use crate::motion::{FloatingShape, FLOATING_SHAPES, GRID_PARALLAX};

use super::ScrollState;

/// Faint grid behind the whole page, drifting down as the page scrolls.
#[component]
pub fn AnimatedGrid() -> impl IntoView {
    let ScrollState { progress, .. } = expect_context::<ScrollState>();
    view! {
        <div
            class="fixed inset-0 pointer-events-none opacity-10"
            style=move || GRID_PARALLAX.translate_y(progress.get())
            aria-hidden="true"
        >
            <svg width="100%" height="100%">
                <defs>
                    <pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">
                        <path
                            d="M 40 0 L 0 0 0 40"
                            fill="none"
                            stroke-width="1"
                            style="stroke: var(--border)"
                        />
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#grid)" />
            </svg>
        </div>
    }
}

#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {FLOATING_SHAPES.into_iter().map(|shape| view! { <Shape shape /> }).collect_view()}
        </div>
    }
}

#[component]
fn Shape(shape: FloatingShape) -> impl IntoView {
    let ScrollState { progress, .. } = expect_context::<ScrollState>();
    let fill = match shape.clip_path {
        Some(clip) => format!("background-color: var(--accent); clip-path: {clip};"),
        None => "background-color: var(--accent);".to_string(),
    };
    let fill_class = if shape.rounded {
        "w-full h-full rounded-full"
    } else {
        "w-full h-full"
    };
    view! {
        <div
            class=format!("absolute opacity-5 {}", shape.class)
            style=move || shape.parallax.translate_y(progress.get())
        >
            <div class="w-full h-full animate-drift" style=shape.loop_style()>
                <div class=fill_class style=fill></div>
            </div>
        </div>
    }
}

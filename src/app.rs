mod about;
mod avatar;
mod browser;
mod contact;
mod controls;
mod decor;
mod homepage;
mod icons;
mod projects;
mod reveal;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions};

use crate::content::{person_json_ld, BRAND, OWNER, SITE_DESCRIPTION};
use crate::page::PageEffects;
use crate::scroll::ScrollUpdate;
use crate::theme::Theme;

use browser::{BrowserScheduler, WindowScroll};
use controls::{BackToTop, ThemeToggle};
use decor::AnimatedGrid;
use homepage::HomePage;

type BrowserEffects = PageEffects<BrowserScheduler, WindowScroll>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/techabdu-portfolio.css" />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Read access to the active theme plus the one way to change it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeState {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeState {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
        log::debug!("theme toggled to {:?}", self.theme.get_untracked());
    }
}

/// Scroll derived values, read only below the root.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    pub past_threshold: ReadSignal<bool>,
    /// Smoothed progress in `[0, 1]`.
    pub progress: ReadSignal<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypedText(pub ReadSignal<String>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());
    let theme_state = ThemeState { theme, set_theme };
    provide_context(theme_state);

    let (past_threshold, set_past_threshold) = signal(false);
    let (progress, set_progress) = signal(0.0);
    provide_context(ScrollState {
        past_threshold,
        progress,
    });

    let (typed, set_typed) = signal(String::new());
    provide_context(TypedText(typed));

    let effects = StoredValue::new(None::<Arc<BrowserEffects>>);

    // the spring only needs frames while it is catching up with the page
    let (settled, set_settled) = signal(true);
    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let step = effects.with_value(|e| {
                e.as_ref()
                    .and_then(|e| e.scroll().advance(args.delta / 1000.0))
            });
            match step {
                Some(p) => set_progress.set(p),
                None => set_settled.set(true),
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    Effect::watch(
        move || settled.get(),
        move |settled, _, _| {
            if *settled {
                pause();
            }
        },
        false,
    );

    // effects only run in the browser, the server renders the resting state
    Effect::new(move |_| {
        let resume = resume.clone();
        let started = Arc::new(BrowserEffects::start(
            Arc::new(BrowserScheduler),
            Arc::new(WindowScroll),
            move |text| set_typed.set(text),
            move |update: ScrollUpdate| {
                set_past_threshold.set(update.past_threshold);
                if update.needs_frames {
                    set_settled.set(false);
                    resume();
                }
            },
        ));
        effects.set_value(Some(started.clone()));
        on_cleanup(move || started.teardown());
    });

    view! {
        <Title formatter=|title| format!("{BRAND} - {title}") />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="author" content=OWNER />
        <Meta name="theme-color" content=move || theme_state.get().palette().background />
        <Router>
            <div
                class="min-h-screen transition-colors duration-500 bg-[var(--bg)] text-[var(--text)]"
                style=move || {
                    let theme = theme_state.get();
                    format!("{} color-scheme: {};", theme.palette().css_vars(), theme.color_scheme())
                }
            >
                <AnimatedGrid />
                <ThemeToggle />
                <BackToTop />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::BRAND;

use super::about::About;
use super::contact::{CallToAction, Footer};
use super::decor::FloatingShapes;
use super::projects::Projects;
use super::reveal::{FadeInUp, RevealGroup};
use super::{ThemeState, TypedText};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <CallToAction />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    view! {
        <section class="relative min-h-screen flex items-center justify-center px-6 overflow-hidden">
            <FloatingShapes />
            <RevealGroup immediate=true class="relative z-10 text-center max-w-4xl mx-auto">
                <FadeInUp index=0>
                    <h1 class="text-7xl md:text-9xl font-bold mb-6 tracking-tight">{BRAND}</h1>
                </FadeInUp>
                <FadeInUp index=1>
                    <div
                        class="rounded-2xl p-8 mb-8 backdrop-blur-sm border border-[var(--border)]"
                        style=move || format!("background-color: {};", theme.get().glass())
                    >
                        <PhilosophyLine />
                    </div>
                </FadeInUp>
                <FadeInUp index=2 class="flex flex-col items-center gap-2">
                    <span class="text-sm uppercase tracking-wider text-[var(--text-secondary)]">
                        "Scroll to explore"
                    </span>
                    <div class="w-6 h-10 rounded-full flex items-start justify-center pt-2 border-2 border-[var(--border)] animate-nudge">
                        <div class="w-1.5 h-1.5 rounded-full bg-[var(--accent)]"></div>
                    </div>
                </FadeInUp>
            </RevealGroup>
        </section>
    }
}

/// `const philosophy = "..."` with the string typed out.
#[component]
fn PhilosophyLine() -> impl IntoView {
    let TypedText(typed) = expect_context::<TypedText>();
    view! {
        <code class="text-lg md:text-xl font-mono block text-left">
            <span class="text-[var(--accent)]">"const"</span>
            " "
            <span>"philosophy"</span>
            " "
            <span class="text-[var(--text-secondary)]">"="</span>
            " "
            <span class="text-[#50C878]">"\"" {move || typed.get()} "\""</span>
            <span class="text-[var(--accent)] animate-blink">"|"</span>
        </code>
    }
}

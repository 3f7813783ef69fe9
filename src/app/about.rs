use leptos::prelude::*;

use crate::content::{ABOUT, INTRO, OWNER, TECH_STACK};
use crate::motion::breathe;

use super::avatar::Avatar;
use super::reveal::{FadeInUp, RevealGroup};
use super::ThemeState;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="py-24 px-6">
            <div class="max-w-4xl mx-auto">
                <RevealGroup class="text-center">
                    <FadeInUp index=0 class="mb-8 flex justify-center">
                        <Avatar />
                    </FadeInUp>
                    <FadeInUp index=1>
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">"Hi, I'm " {OWNER}</h2>
                    </FadeInUp>
                    <FadeInUp index=2>
                        <p class="text-xl md:text-2xl mb-8 leading-relaxed text-[var(--text-secondary)]">
                            {INTRO}
                        </p>
                    </FadeInUp>
                    <FadeInUp index=3>
                        <p class="text-lg mb-12 max-w-2xl mx-auto text-[var(--text-secondary)]">
                            {ABOUT}
                        </p>
                    </FadeInUp>
                    <FadeInUp index=4 class="flex flex-wrap justify-center gap-4">
                        <TechStack />
                    </FadeInUp>
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
fn TechStack() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    TECH_STACK
        .iter()
        .enumerate()
        .map(|(i, tech)| {
            view! {
                <div
                    class="px-6 py-3 rounded-full font-medium text-[var(--accent)] border border-[var(--accent)]/25 animate-breathe transition-transform duration-200 hover:scale-110"
                    style=move || format!("background-color: {}; {}", theme.get().accent_tint(), breathe(i))
                >
                    {*tech}
                </div>
            }
        })
        .collect_view()
}

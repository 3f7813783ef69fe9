use leptos::prelude::*;

use crate::content::{copyright, Icon, CONTACT_URL, CTA_BODY, CTA_TITLE, SOCIAL_LINKS};

use super::icons::SvgIcon;
use super::reveal::{FadeInUp, RevealGroup};
use super::ThemeState;

#[component]
pub fn CallToAction() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    view! {
        <section class="py-32 px-6">
            <RevealGroup class="max-w-4xl mx-auto text-center">
                <FadeInUp index=0>
                    <h2 class="text-5xl md:text-6xl font-bold mb-6">{CTA_TITLE}</h2>
                </FadeInUp>
                <FadeInUp index=1>
                    <p class="text-xl mb-12 max-w-2xl mx-auto text-[var(--text-secondary)]">
                        {CTA_BODY}
                    </p>
                </FadeInUp>
                <FadeInUp index=2>
                    <a
                        href=CONTACT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-3 px-10 py-5 rounded-full text-lg font-semibold text-white bg-[var(--accent)] transition-transform duration-300 hover:scale-105"
                        style=move || format!("box-shadow: {};", theme.get().control_shadow())
                    >
                        <SvgIcon icon=Icon::MessageCircle />
                        "Get In Touch"
                    </a>
                </FadeInUp>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-6 border-t border-[var(--border)]">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex gap-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                    class="text-[var(--text-secondary)] hover:text-[var(--accent)] transition-colors duration-300"
                                >
                                    <SvgIcon icon=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-[var(--text-secondary)]">{copyright()}</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_open_in_new_tab() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer /> }.to_html());

        for link in SOCIAL_LINKS {
            assert!(html.contains(&format!("aria-label=\"{}\"", link.name)));
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), SOCIAL_LINKS.len());
        assert!(html.contains("All rights reserved."));
    }
}

use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::content::{Icon, Project, PROJECTS};
use crate::motion::Tilt;

use super::icons::SvgIcon;
use super::reveal::{FadeInUp, RevealGroup, SlideIn};
use super::ThemeState;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <RevealGroup>
                    <FadeInUp index=0>
                        <h2 class="text-4xl md:text-5xl font-bold mb-16 text-center">
                            "Featured Projects"
                        </h2>
                    </FadeInUp>
                    <ProjectGrid projects=PROJECTS />
                </RevealGroup>
            </div>
        </section>
    }
}

/// One card per project, in list order.
#[component]
pub fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            {projects
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    view! {
                        <FadeInUp index={i + 1} class="group">
                            <ProjectCard project=*project />
                        </FadeInUp>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let theme = use_context::<ThemeState>();
    let card = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card);

    let tilt = move || {
        if is_outside.get() {
            Tilt::REST
        } else {
            Tilt::from_pointer(
                element_x.get(),
                element_y.get(),
                element_width.get(),
                element_height.get(),
            )
        }
    };
    let surface = move || {
        let theme = theme.map(|t| t.get()).unwrap_or_default();
        format!(
            "background-color: {}; box-shadow: {}; transform: {};",
            theme.glass(),
            theme.card_shadow(),
            tilt().css_transform()
        )
    };

    view! {
        <div
            node_ref=card
            class="project-card rounded-2xl p-8 h-full backdrop-blur-sm transition-all duration-300 border border-[var(--border)]"
            data-project=project.id
            style=surface
        >
            <h3 class="text-2xl font-bold mb-4">{project.name}</h3>
            <p class="mb-6 leading-relaxed text-[var(--text-secondary)]">{project.description}</p>
            <RevealGroup margin="0px" class="flex flex-wrap gap-2 mb-6">
                {project
                    .tech
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        view! {
                            <SlideIn
                                index=i
                                class="px-3 py-1 rounded-full text-sm font-medium text-[var(--accent)] bg-[var(--accent)]/15"
                            >
                                {*tech}
                            </SlideIn>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
            <a
                href=project.url
                class="inline-flex items-center gap-2 hover:gap-3 px-6 py-3 rounded-full font-medium transition-all duration-300 text-white bg-[var(--accent)]"
            >
                "View Live"
                <SvgIcon icon=Icon::ExternalLink size=18 />
            </a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_grid_renders_projects_in_order() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <ProjectGrid projects=PROJECTS /> }.to_html());

        assert_eq!(html.matches("class=\"project-card").count(), PROJECTS.len());
        let positions = PROJECTS
            .iter()
            .map(|p| {
                html.find(&format!("data-project=\"{}\"", p.id))
                    .expect("every project is rendered")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for project in PROJECTS {
            assert!(html.contains(project.name));
        }
    }
}

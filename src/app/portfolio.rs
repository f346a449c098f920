use leptos::prelude::*;
use leptos_use::{use_media_query, use_raf_fn, UseRafFnCallbackArgs};

use super::nav::NavBar;
use crate::content::{copyright_line, deployed_on, IDENTITY, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::page::PortfolioState;
use crate::theme::Theme;

/// The whole page: nav bar, heading, skills, projects, contact and footer.
#[component]
pub fn PortfolioView() -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let state = RwSignal::new(PortfolioState::default());
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");

    // no-op during server rendering
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if !state.with_untracked(|s| s.is_animating()) {
            return;
        }
        if reduced_motion.get_untracked() {
            state.update(|s| s.settle());
        } else {
            state.update(|s| s.tick(args.delta));
        }
    });

    view! {
        <div class="flex-grow min-h-screen bg-surface text-ink font-sans" style=theme.css_variables()>
            <NavBar />
            <main class="mx-auto max-w-6xl px-4 sm:px-6 mt-16">
                <Hero state />
                <SkillsSection />
                <ProjectsSection state />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Hero(state: RwSignal<PortfolioState>) -> impl IntoView {
    view! {
        <section id="about">
            <h1
                class="pf-h1 mb-[0.35em] break-words hyphens-auto text-center md:text-left"
                style=move || state.with(|s| s.heading_style())
            >
                {IDENTITY.name}
            </h1>
            <h2
                class="mb-12 text-2xl md:text-[2.125rem] text-ink-muted text-center md:text-left"
                style=move || state.with(|s| s.subtitle_style())
            >
                {IDENTITY.role}
            </h2>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="my-16">
            <h2 class="mb-2 text-2xl font-bold">"Skills"</h2>
            <div class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-6 gap-4">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div
                                data-skill=skill.name
                                class="flex flex-col items-center p-4 bg-paper rounded-lg shadow transition-all duration-300 hover:-translate-y-[5px] hover:shadow-lg"
                            >
                                <i class=format!("{} text-[40px] text-primary", skill.icon.class())></i>
                                <span class="mt-2 text-sm font-medium text-center">{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(state: RwSignal<PortfolioState>) -> impl IntoView {
    view! {
        <section id="projects" class="my-16">
            <h2 class="mb-8 text-2xl font-bold">"Projects"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <article
                                data-project=project.title
                                class="overflow-hidden rounded bg-paper"
                                class:emphasized=move || state.with(|s| s.is_card_emphasized(index))
                                style=move || state.with(|s| s.card_style())
                                on:mouseenter=move |_| {
                                    state
                                        .update(|s| {
                                            if let Err(err) = s.hover_enter(index) {
                                                log::warn!("ignoring project hover: {err}");
                                            }
                                        })
                                }
                                on:mouseleave=move |_| state.update(|s| s.hover_leave())
                            >
                                <img
                                    src=project.image
                                    alt=project.title
                                    height="200"
                                    class="h-[200px] w-full object-cover"
                                />
                                <div class="p-4">
                                    <h3 class="mb-2 text-xl font-bold">{project.title}</h3>
                                    <p class="text-sm text-ink-muted">{project.description}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="my-16">
            <h2 class="mb-8 text-2xl font-bold">"Get in Touch"</h2>
            <div class="flex justify-center gap-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <button
                                type="button"
                                aria-label=link.label
                                class="p-3 text-4xl text-primary hover:text-secondary hover:-translate-y-[3px] transition-all duration-300"
                            >
                                <i class=link.icon.class()></i>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 py-12 bg-paper">
            <div class="mx-auto max-w-6xl px-4">
                <p class="text-sm text-ink-muted text-center">{copyright_line()}</p>
                {deployed_on()
                    .map(|date| {
                        view! {
                            <p class="mt-2 text-xs text-ink-muted text-center">
                                {format!("Last deployed {date}")}
                            </p>
                        }
                    })}
            </div>
        </footer>
    }
}

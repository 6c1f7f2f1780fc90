use leptos::{either::Either, ev, prelude::*};

use super::SectionHeading;
use crate::catalog::{Catalog, DemoType, Project, CATALOG};
use crate::filter::{list_all_tags, tag_counts, visible_projects, FilterSession};

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1 rounded-full text-sm font-mono border transition-colors bg-accent-cyan text-navy-dark border-accent-cyan"
    } else {
        "px-3 py-1 rounded-full text-sm font-mono border transition-colors bg-accent-cyan/10 text-accent-cyan border-accent-cyan/20 hover:border-accent-cyan/60"
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let catalog: &'static Catalog = &CATALOG;
    let all_tags = list_all_tags(catalog.projects());
    let counts = tag_counts(catalog.projects());

    let session = RwSignal::new(FilterSession::new());
    let visible = Memo::new(move |_| {
        session.with(|s| visible_projects(catalog.projects(), s.state()))
    });
    let (hovered, set_hovered) = signal(None::<usize>);

    let toggle = move |tag: &str| {
        session.update(|s| {
            if let Some(change) = s.toggle(tag) {
                log::debug!("project filter changed: {:?}", change.selected);
            }
        });
    };
    let clear = move || {
        session.update(|s| {
            if s.clear().is_some() {
                log::debug!("project filters cleared");
            }
        });
    };
    let visible_len = move || visible.with(|v| v.len());
    let active = move || {
        let i = session.with(|s| s.active_index());
        visible.with(|v| v.get(i).copied())
    };

    let chips = all_tags
        .into_iter()
        .map(|tag| {
            let count = counts.get(&tag).copied().unwrap_or_default();
            let selected = {
                let tag = tag.clone();
                Signal::derive(move || session.with(|s| s.state().is_selected(&tag)))
            };
            let on_click = {
                let tag = tag.clone();
                move |_: ev::MouseEvent| toggle(&tag)
            };
            view! {
                <button
                    class=move || chip_class(selected.get())
                    aria-pressed=move || selected.get().to_string()
                    on:click=on_click
                >
                    {tag}
                    <span class="ml-2 opacity-60">{count}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="min-h-screen flex items-center justify-center px-6 lg:px-20 py-20">
            <div class="max-w-7xl w-full">
                <SectionHeading number="03." title="Projects" />
                <div class="flex flex-wrap items-center gap-2 mb-4">
                    <span class="font-mono text-gray-400 mr-2">"$ filter --tag"</span>
                    {chips}
                    <Show when=move || !session.with(|s| s.state().is_empty())>
                        <button
                            class="px-3 py-1 text-sm font-mono text-red-400 hover:text-red-300"
                            on:click=move |_| clear()
                        >
                            "✕ clear filters"
                        </button>
                    </Show>
                </div>
                <p class="font-mono text-sm text-gray-500 mb-8">
                    {move || format!("{} of {} projects", visible_len(), catalog.len())}
                </p>
                {move || match active() {
                    Some(project) => {
                        Either::Left(
                            view! {
                                <Spotlight project />
                                <CarouselControls session visible />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="glass rounded-xl p-12 text-center font-mono">
                                    <p class="text-gray-400 mb-2">
                                        "grep: no projects match the selected tags"
                                    </p>
                                    <p class="text-gray-500 text-sm mb-6">
                                        {move || {
                                            session
                                                .with(|s| s.state().selected().collect::<Vec<_>>().join(" + "))
                                        }}
                                    </p>
                                    <button
                                        class="px-6 py-3 bg-accent-cyan/10 text-accent-cyan rounded-lg border border-accent-cyan/30 hover:bg-accent-cyan/20 transition-colors"
                                        on:click=move |_| clear()
                                    >
                                        "Clear filters"
                                    </button>
                                </div>
                            },
                        )
                    }
                }}
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mt-12">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| {
                                view! {
                                    <div
                                        class="group relative cursor-pointer"
                                        on:mouseenter=move |_| set_hovered(Some(i))
                                        on:mouseleave=move |_| set_hovered(None)
                                        on:click=move |_| {
                                            let len = visible_len();
                                            session.update(|s| s.select(i, len));
                                        }
                                    >
                                        <ProjectCard
                                            project
                                            hovered=Signal::derive(move || hovered.get() == Some(i))
                                            active=Signal::derive(move || {
                                                session.with(|s| s.active_index()) == i
                                            })
                                        />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CarouselControls(session: RwSignal<FilterSession>, visible: Memo<Vec<&'static Project>>) -> impl IntoView {
    let len = move || visible.with(|v| v.len());
    view! {
        <div class="flex items-center justify-center gap-6 mt-6">
            <button
                class="px-4 py-2 font-mono text-accent-cyan hover:text-accent-teal disabled:opacity-30"
                aria-label="Previous project"
                disabled=move || len() < 2
                on:click=move |_| {
                    let len = len();
                    session.update(|s| s.prev(len));
                }
            >
                "←"
            </button>
            <div class="flex gap-2">
                {move || {
                    (0..len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if session.with(|s| s.active_index()) == i {
                                            "w-3 h-3 rounded-full bg-accent-cyan"
                                        } else {
                                            "w-3 h-3 rounded-full bg-accent-cyan/20 hover:bg-accent-cyan/50"
                                        }
                                    }
                                    aria-label=format!("Show project {}", i + 1)
                                    on:click=move |_| {
                                        let len = len();
                                        session.update(|s| s.select(i, len));
                                    }
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                class="px-4 py-2 font-mono text-accent-cyan hover:text-accent-teal disabled:opacity-30"
                aria-label="Next project"
                disabled=move || len() < 2
                on:click=move |_| {
                    let len = len();
                    session.update(|s| s.next(len));
                }
            >
                "→"
            </button>
        </div>
    }
}

#[component]
fn Spotlight(project: &'static Project) -> impl IntoView {
    let demo_badge = match project.demo_type {
        DemoType::LiveDemo => "● LIVE DEMO",
        DemoType::Game => "🎮 GAME",
        DemoType::Screenshot => "📸 SCREENSHOT",
    };

    view! {
        <article class="glass rounded-xl overflow-hidden grid grid-cols-1 lg:grid-cols-2">
            <div class=format!(
                "relative min-h-64 bg-gradient-to-br {} flex items-center justify-center",
                project.demo_gradient,
            )>
                {project
                    .demo_image
                    .as_deref()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=format!("{} preview", project.title)
                                class="absolute inset-0 w-full h-full object-cover opacity-90"
                                loading="lazy"
                            />
                        }
                    })}
                <span class="absolute top-4 left-4 px-3 py-1 rounded-full bg-navy-dark/80 text-accent-cyan text-xs font-mono">
                    {demo_badge}
                </span>
                {project
                    .demo_url
                    .as_deref()
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="relative px-6 py-3 bg-navy-dark/80 text-accent-cyan rounded-lg font-mono border border-accent-cyan/40 hover:bg-navy-dark"
                            >
                                "Open demo ↗"
                            </a>
                        }
                    })}
            </div>
            <div class="p-8 flex flex-col">
                <div class="flex items-center justify-between mb-3 font-mono text-xs text-gray-500">
                    <span class="text-green-400">{project.status.clone()}</span>
                    <span>{project.year.clone()}</span>
                </div>
                <h3 class="text-2xl font-bold mb-3">{project.title.clone()}</h3>
                <p class="text-gray-400 mb-4">{project.description.clone()}</p>
                {project
                    .code
                    .as_deref()
                    .map(|code| {
                        view! {
                            <pre class="bg-navy-dark/80 rounded-lg p-4 text-xs text-accent-cyan/90 overflow-x-auto mb-4">
                                <code>{code}</code>
                            </pre>
                        }
                    })}
                <LanguageBar project />
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1 bg-accent-cyan/10 text-accent-cyan rounded-full text-xs font-mono border border-accent-cyan/20">
                                    {t.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <ProjectLinks project />
            </div>
        </article>
    }
}

#[component]
fn LanguageBar(project: &'static Project) -> impl IntoView {
    (!project.languages.is_empty()).then(|| view! {
        <div class="mb-4">
            <div class="flex h-2 rounded-full overflow-hidden bg-navy-light">
                {project
                    .languages
                    .iter()
                    .map(|l| {
                        view! {
                            <div
                                class="h-full bg-gradient-to-r from-accent-cyan to-accent-teal border-r border-navy-dark"
                                style=format!("width: {}%", l.percent)
                                title=format!("{} {}%", l.name, l.percent)
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap gap-3 mt-2 text-xs font-mono text-gray-400">
                {project
                    .languages
                    .iter()
                    .map(|l| view! { <span>{format!("{} {:.1}%", l.name, l.percent)}</span> })
                    .collect_view()}
            </div>
        </div>
    })
}

#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    view! {
        <div class="flex gap-4 mt-auto">
            {project
                .live_link
                .as_deref()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-3 bg-accent-cyan/20 rounded-lg hover:bg-accent-cyan/30 transition-colors text-accent-cyan font-mono text-sm"
                            on:click=|ev| ev.stop_propagation()
                        >
                            "Live ↗"
                        </a>
                    }
                })}
            {project
                .github_link
                .as_deref()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-3 bg-accent-cyan/20 rounded-lg hover:bg-accent-cyan/30 transition-colors text-accent-cyan font-mono text-sm"
                            on:click=|ev| ev.stop_propagation()
                        >
                            "GitHub ↗"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, hovered: Signal<bool>, active: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if active.get() {
                "glass rounded-xl overflow-hidden h-full flex flex-col border-accent-cyan/60 transition-transform duration-300 group-hover:-translate-y-1"
            } else {
                "glass rounded-xl overflow-hidden h-full flex flex-col transition-transform duration-300 group-hover:-translate-y-1"
            }
        }>
            <div class=format!(
                "relative h-48 bg-gradient-to-br {} flex items-center justify-center overflow-hidden",
                project.demo_gradient,
            )>
                {project
                    .demo_image
                    .as_deref()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=""
                                class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-300"
                                loading="lazy"
                            />
                        }
                    })}
                <div class=move || {
                    if hovered.get() {
                        "absolute inset-0 bg-navy-dark/90 backdrop-blur-sm flex items-center justify-center gap-4 opacity-100 transition-opacity"
                    } else {
                        "absolute inset-0 bg-navy-dark/90 backdrop-blur-sm flex items-center justify-center gap-4 opacity-0 transition-opacity pointer-events-none"
                    }
                }>
                    <ProjectLinks project />
                </div>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-2xl font-bold mb-3 group-hover:text-accent-cyan transition-colors">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-400 mb-4 flex-1 line-clamp-4">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1 bg-accent-cyan/10 text-accent-cyan rounded-full text-xs font-mono border border-accent-cyan/20">
                                    {t.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

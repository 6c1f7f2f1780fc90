use leptos::prelude::*;

use super::SectionHeading;
use crate::stack::{categories, ring_offset, TECHNOLOGIES};

const RING_RADIUS: f64 = 45.0;

#[component]
pub fn TechStack() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;

    view! {
        <section id="tech" class="min-h-screen flex items-center justify-center px-6 lg:px-20 py-20">
            <div class="max-w-6xl w-full">
                <SectionHeading number="04." title="Tech Stack" />
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {TECHNOLOGIES
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <div
                                    class="relative hover:-translate-y-2 transition-transform duration-300"
                                    on:mouseenter=move |_| set_hovered(Some(i))
                                    on:mouseleave=move |_| set_hovered(None)
                                >
                                    <div class="glass rounded-lg p-6 text-center cursor-pointer hover:border-accent-cyan/50 transition-all duration-300 h-full flex flex-col items-center justify-center">
                                        <div class="text-5xl mb-3">{tech.icon}</div>
                                        <h3 class="font-semibold text-white mb-2">{tech.name}</h3>
                                        <span class="text-xs text-accent-cyan font-mono">{tech.category}</span>
                                        <div class="w-full mt-4">
                                            <div class="h-1 bg-navy-light rounded-full overflow-hidden">
                                                <div
                                                    class="h-full bg-gradient-to-r from-accent-cyan to-accent-teal grow-x"
                                                    style=format!("width: {}%", tech.proficiency)
                                                />
                                            </div>
                                        </div>
                                        <Show when=move || hovered.get() == Some(i)>
                                            <div class="absolute inset-0 glass rounded-lg border-2 border-accent-cyan flex flex-col items-center justify-center p-4 z-10 pop-in">
                                                <div class="text-4xl mb-3">{tech.icon}</div>
                                                <h3 class="font-bold text-white mb-2">{tech.name}</h3>
                                                <div class="text-3xl font-bold gradient-text mb-2">
                                                    {format!("{}%", tech.proficiency)}
                                                </div>
                                                <p class="text-sm text-gray-400">"Proficiency Level"</p>
                                                <svg class="absolute inset-0 w-full h-full -rotate-90" viewBox="0 0 100 100">
                                                    <circle
                                                        cx="50"
                                                        cy="50"
                                                        r="45"
                                                        fill="none"
                                                        stroke="rgba(100, 255, 218, 0.1)"
                                                        stroke-width="2"
                                                    />
                                                    <circle
                                                        class="ring-progress"
                                                        cx="50"
                                                        cy="50"
                                                        r="45"
                                                        fill="none"
                                                        stroke="#64ffda"
                                                        stroke-width="2"
                                                        stroke-dasharray=circumference.to_string()
                                                        stroke-dashoffset=ring_offset(RING_RADIUS, tech.proficiency)
                                                            .to_string()
                                                    />
                                                </svg>
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 flex flex-wrap justify-center gap-4">
                    {categories(TECHNOLOGIES)
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="px-4 py-2 glass rounded-full text-sm">
                                    <span class="text-accent-cyan">"●"</span>
                                    " "
                                    {category}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

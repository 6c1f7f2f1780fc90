use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::SectionHeading;
use crate::catalog::CATALOG;
use crate::typewriter::Typewriter;

const TICK_MS: u64 = 30;

static BIO: &[&str] = &[
    "$ whoami",
    "> Junior Software Engineer | Cloud & DevOps Enthusiast",
    "",
    "$ cat bio.txt",
    "> Computer Science graduate from King's College London specializing in cloud engineering.",
    "> After working as a Frontend Developer at Strand Analytica,",
    "> I discovered my passion for cloud architecture and DevOps.",
    "> Currently building personal projects while preparing for AWS Developer Associate certification.",
    "",
    "$ ls skills/",
    "> Frontend Development   ████████████ 100%",
    "> Backend Development    ██████████░░  80%",
    "> Cloud Infrastructure   ████████░░░░  65%",
    "> DevOps Tools           █████████░░░  75%",
    "",
    "$ echo $INTERESTS",
    "> [ Full-Stack Development, AI/ML, Web3, Agentic RAG Systems ]",
];

#[component]
pub fn About() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(BIO));
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            typewriter.update(|t| {
                t.tick();
            })
        },
        TICK_MS,
    );
    Effect::new(move |_| {
        if typewriter.with(Typewriter::is_done) {
            pause();
        }
    });

    let stats = [
        (CATALOG.len().to_string(), "Projects Completed"),
        ("4+".to_string(), "Years Experience with Coding"),
        ("100%".to_string(), "Commitment"),
    ];

    view! {
        <section id="about" class="min-h-screen flex items-center justify-center px-6 lg:px-20 py-20">
            <div class="max-w-5xl w-full">
                <SectionHeading number="01." title="About Me" />
                <div
                    class="glass rounded-lg p-8 font-mono cursor-pointer"
                    title="Click to skip"
                    on:click=move |_| typewriter.update(Typewriter::finish)
                >
                    <div class="flex items-center gap-2 mb-6 pb-4 border-b border-accent-cyan/20">
                        <div class="w-3 h-3 rounded-full bg-red-500" />
                        <div class="w-3 h-3 rounded-full bg-yellow-500" />
                        <div class="w-3 h-3 rounded-full bg-green-500" />
                        <span class="ml-4 text-gray-400 text-sm">"terminal — zsh"</span>
                    </div>
                    <div class="text-accent-cyan/90 whitespace-pre-wrap leading-relaxed">
                        {move || typewriter.with(Typewriter::text)}
                        <span class="inline-block w-2 h-5 bg-accent-cyan animate-pulse ml-1 align-middle" />
                    </div>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">
                    {stats
                        .into_iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="glass rounded-lg p-6 text-center hover:border-accent-cyan/30 transition-all duration-300">
                                    <div class="text-4xl font-bold gradient-text mb-2">{number}</div>
                                    <div class="text-gray-400">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

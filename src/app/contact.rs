use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::SectionHeading;
use crate::contact::{Outbox, SubmitStatus, SEND_DELAY_MS, SENT_DISPLAY_MS};

const BUILD_TIME: &str = env!("BUILD_TIME");

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "📦", "https://github.com/egepakten"),
    ("LinkedIn", "💼", "https://linkedin.com"),
    ("Email", "📧", "mailto:your@email.com"),
];

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-navy-light border border-accent-cyan/20 rounded-lg focus:border-accent-cyan focus:outline-none transition-colors text-white";

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|d| d.year())
        .unwrap_or(2025)
}

#[component]
pub fn Contact() -> impl IntoView {
    let outbox = RwSignal::new(Outbox::default());
    let (error, set_error) = signal(None::<String>);

    let UseTimeoutFnReturn {
        start: start_reset,
        ..
    } = use_timeout_fn(
        move |_: ()| outbox.update(Outbox::acknowledge),
        SENT_DISPLAY_MS,
    );
    let UseTimeoutFnReturn {
        start: start_send,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            outbox.update(Outbox::delivered);
            log::info!("contact message sent");
            start_reset(());
        },
        SEND_DELAY_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = Ok(());
        outbox.update(|o| result = o.submit());
        match result {
            Ok(()) => {
                set_error(None);
                log::debug!("contact form submitted");
                start_send(());
            }
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                set_error(Some(e.to_string()));
            }
        }
    };

    let status = move || outbox.with(|o| o.status);

    view! {
        <section id="contact" class="min-h-screen flex items-center justify-center px-6 lg:px-20 py-20">
            <div class="max-w-4xl w-full">
                <SectionHeading number="05." title="Get In Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
                        <p class="text-gray-400 mb-8 leading-relaxed">
                            "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions. Whether you have a question or just want to say hi, feel free to reach out!"
                        </p>
                        <div class="space-y-4 mb-8">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(name, icon, url)| {
                                    view! {
                                        <a
                                            href=*url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-4 glass rounded-lg p-4 hover:border-accent-cyan/50 hover:translate-x-2 transition-all duration-300 group"
                                        >
                                            <span class="text-3xl">{*icon}</span>
                                            <span class="font-mono text-accent-cyan group-hover:text-accent-teal transition-colors">
                                                {*name}
                                            </span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="glass rounded-lg p-6">
                            <p class="font-mono text-accent-cyan mb-2">"$ status"</p>
                            <p class="text-gray-400">
                                <span class="inline-block w-2 h-2 bg-green-500 rounded-full mr-2 animate-pulse" />
                                "Available for freelance work"
                            </p>
                        </div>
                    </div>
                    <form class="glass rounded-xl p-8" novalidate=true on:submit=on_submit>
                        <div class="space-y-6">
                            <div>
                                <label for="name" class="block text-sm font-mono text-accent-cyan mb-2">
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required=true
                                    class=INPUT_CLASS
                                    placeholder="John Doe"
                                    prop:value=move || outbox.with(|o| o.form.name.clone())
                                    on:input=move |ev| outbox.update(|o| o.form.name = event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-mono text-accent-cyan mb-2">
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required=true
                                    class=INPUT_CLASS
                                    placeholder="john@example.com"
                                    prop:value=move || outbox.with(|o| o.form.email.clone())
                                    on:input=move |ev| outbox.update(|o| o.form.email = event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-mono text-accent-cyan mb-2">
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required=true
                                    rows="5"
                                    class=format!("{INPUT_CLASS} resize-none")
                                    placeholder="Your message here..."
                                    prop:value=move || outbox.with(|o| o.form.message.clone())
                                    on:input=move |ev| outbox.update(|o| o.form.message = event_target_value(&ev))
                                />
                            </div>
                            {move || error.get().map(|e| view! { <p class="text-red-400 text-sm font-mono">{e}</p> })}
                            <button
                                type="submit"
                                disabled=move || status() == SubmitStatus::Sending
                                class=move || match status() {
                                    SubmitStatus::Sending => "w-full py-4 rounded-lg font-mono font-bold transition-all duration-300 bg-accent-cyan/50 cursor-not-allowed",
                                    SubmitStatus::Sent => "w-full py-4 rounded-lg font-mono font-bold transition-all duration-300 bg-green-500 text-white",
                                    SubmitStatus::Idle => "w-full py-4 rounded-lg font-mono font-bold transition-all duration-300 bg-accent-cyan text-navy-dark hover:bg-accent-teal hover:scale-105 active:scale-95 animate-glow",
                                }
                            >
                                <span class="flex items-center justify-center gap-2">
                                    <Show when=move || status() == SubmitStatus::Sending>
                                        <span class="inline-block w-4 h-4 border-2 border-navy-dark border-t-transparent rounded-full animate-spin" />
                                    </Show>
                                    {move || status().label()}
                                </span>
                            </button>
                        </div>
                    </form>
                </div>
                <footer class="mt-16 text-center">
                    <p class="text-gray-400 font-mono">
                        "Designed & Built by " <span class="text-accent-cyan">"Kerem Ege Pakten"</span>
                    </p>
                    <p class="text-gray-500 text-sm mt-2">
                        {format!("© {} All rights reserved", build_year())}
                    </p>
                </footer>
            </div>
        </section>
    }
}

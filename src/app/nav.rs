use leptos::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#tech", "Tech"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (open, set_open) = signal(false);

    let links = move |mobile: bool| {
        SECTIONS
            .iter()
            .enumerate()
            .map(|(i, (href, label))| {
                view! {
                    <a
                        href=*href
                        class="font-mono text-sm text-gray-300 hover:text-accent-cyan transition-colors"
                        on:click=move |_| {
                            if mobile {
                                set_open(false);
                            }
                        }
                    >
                        <span class="text-accent-cyan mr-1">{format!("{:02}.", i + 1)}</span>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-navy-dark/80 backdrop-blur-md shadow-lg">
            <div class="mx-auto max-w-7xl px-6 lg:px-20 py-4 flex items-center justify-between">
                <a href="#home" class="text-2xl font-bold font-mono text-accent-cyan">
                    "<KEP />"
                </a>
                <nav class="hidden md:flex items-center gap-8">{links(false)}</nav>
                <button
                    class="md:hidden text-accent-cyan text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <nav class="md:hidden flex flex-col gap-4 px-6 pb-6">{links(true)}</nav>
            </Show>
        </header>
    }
}

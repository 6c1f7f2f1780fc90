mod about;
mod contact;
mod experience;
mod hero;
mod nav;
mod projects;
mod tech_stack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use nav::Nav;
use projects::Projects;
use tech_stack::TechStack;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-navy-dark text-gray-100 scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Kerem Ege Pakten - {title}") />
        <Router>
            <Nav />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Projects />
        <TechStack />
        <Contact />
    }
}

#[component]
fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl lg:text-5xl font-bold mb-12 flex items-center">
            <span class="text-accent-cyan font-mono mr-4">{number}</span>
            {title}
            <div class="ml-8 h-[1px] flex-1 bg-gradient-to-r from-accent-cyan/50 to-transparent" />
        </h2>
    }
}

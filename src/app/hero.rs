use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center px-6 lg:px-20 relative"
        >
            <div class="max-w-5xl w-full fade-in-up">
                <p class="text-accent-cyan font-mono text-lg mb-6">"Hi, my name is"</p>
                <h1 class="text-6xl lg:text-8xl font-bold mb-4 gradient-text">
                    "Kerem Ege Pakten"
                </h1>
                <h2 class="text-4xl font-bold text-gray-400 mb-8">
                    "Junior Software Engineer | Cloud & DevOps Enthusiast"
                </h2>
                <p class="text-gray-400 text-lg lg:text-xl max-w-2xl mb-12 leading-relaxed">
                    "Computer Science graduate from King's College London specializing in cloud engineering and full-stack development. Experienced with AWS, React, and TypeScript. Currently building individual Cloud & AI projects while preparing for the AWS Developer Associate certification."
                </p>
                <div class="flex flex-wrap gap-6">
                    <a
                        href="#projects"
                        class="px-8 py-4 border-2 border-accent-cyan text-accent-cyan rounded-lg font-mono hover:bg-accent-cyan/10 hover:scale-105 active:scale-95 transition-all duration-300 animate-float"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 bg-accent-cyan/10 text-accent-cyan rounded-lg font-mono border-2 border-transparent hover:border-accent-cyan hover:scale-105 active:scale-95 transition-all duration-300"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
            <div
                class="absolute top-1/4 right-10 w-32 h-32 border border-accent-cyan/20 rounded-full animate-float"
                style="animation-delay: 0.5s"
            />
            <div
                class="absolute bottom-1/4 left-10 w-20 h-20 border border-accent-cyan/20 rounded-lg rotate-45 animate-float"
                style="animation-delay: 1s"
            />
        </section>
    }
}

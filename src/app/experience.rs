use leptos::prelude::*;

use super::SectionHeading;

struct Role {
    company: &'static str,
    position: &'static str,
    period: &'static str,
    location: Option<&'static str>,
    logo: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
    technologies: &'static [&'static str],
}

static ROLES: &[Role] = &[
    Role {
        company: "Personal Projects & Certifications",
        position: "Individual Cloud & AI Projects",
        period: "2025 - Present",
        location: None,
        logo: "🚀",
        description: "Building individual cloud and AI projects to enhance my skills and prepare for AWS Developer Associate certification.",
        achievements: &[
            "Working on a cloud and AI platform built with AWS and Python.",
            "Preparing for the AWS Developer Associate certification.",
        ],
        technologies: &[
            "AWS", "Python", "TypeScript", "React", "Node.js", "Docker", "CI/CD", "Lambda",
            "S3", "SQS", "SNS", "DynamoDB", "ECS", "RDS", "AWS Step Functions", "CodePipeline",
            "LangChain", "RAG", "REST", "JWT",
        ],
    },
    Role {
        company: "Strand Analytica",
        position: "Frontend Developer",
        period: "Oct 2024 - Jan 2025",
        location: Some("London, UK"),
        logo: "💼",
        description: "Developed responsive web interfaces using React and TypeScript in an Agile team.",
        achievements: &[
            "Integrated the frontend with AWS-hosted services and contributed to client-facing website deployment.",
            "Used Chakra UI for component styling and worked with Jira-based workflows.",
        ],
        technologies: &[
            "React", "TypeScript", "Tailwind CSS", "Chakra UI", "AWS", "Git", "GitHub",
            "Docker", "CI/CD", "Agile", "Scrum", "Kanban", "Jira", "Confluence",
        ],
    },
    Role {
        company: "King's College London",
        position: "Bachelor of Science in Computer Science",
        period: "Sep 2021 - Jun 2024",
        location: Some("London, UK"),
        logo: "🎓",
        description: "Bachelor of Science in Computer Science with a focus on AI, Machine Learning, and Data Science.",
        achievements: &[
            "Built full-stack application with React/TypeScript and Flask",
            "Implemented 10+ Projects in the field of AI, Python, and Machine Learning",
            "Team working in projects and group assignments",
        ],
        technologies: &[
            "React", "TypeScript", "Flask", "Scala", "Java", "Python", "Machine Learning",
            "AI", "Computer Vision", "Natural Language Processing", "Data Science",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    // one entry open at a time; clicking the open one closes it
    let (expanded, set_expanded) = signal(Some(0usize));

    view! {
        <section id="experience" class="min-h-screen flex items-center justify-center px-6 lg:px-20 py-20">
            <div class="max-w-5xl w-full">
                <SectionHeading number="02." title="Experience" />
                <div class="relative">
                    <div class="absolute left-8 top-0 bottom-0 w-[2px] bg-gradient-to-b from-accent-cyan via-accent-cyan/50 to-transparent" />
                    <div class="space-y-8">
                        {ROLES
                            .iter()
                            .enumerate()
                            .map(|(i, role)| {
                                let is_open = move || expanded.get() == Some(i);
                                view! {
                                    <div class="relative pl-20">
                                        <div class="absolute left-5 top-6 w-6 h-6 rounded-full bg-navy-dark border-2 border-accent-cyan flex items-center justify-center">
                                            <div
                                                class="w-3 h-3 rounded-full bg-accent-cyan"
                                                class:animate-ping=is_open
                                            />
                                        </div>
                                        <div
                                            class=move || {
                                                if is_open() {
                                                    "glass rounded-lg p-6 cursor-pointer transition-all duration-300 border-accent-cyan/50 bg-navy-light/60"
                                                } else {
                                                    "glass rounded-lg p-6 cursor-pointer transition-all duration-300 hover:border-accent-cyan/30"
                                                }
                                            }
                                            on:click=move |_| {
                                                set_expanded
                                                    .update(|e| {
                                                        *e = if *e == Some(i) { None } else { Some(i) };
                                                    })
                                            }
                                        >
                                            <div class="flex items-start justify-between mb-4">
                                                <div class="flex items-center gap-4">
                                                    <div class="text-4xl">{role.logo}</div>
                                                    <div>
                                                        <h3 class="text-xl font-bold text-white">{role.position}</h3>
                                                        <p class="text-accent-cyan font-mono">{role.company}</p>
                                                        {role
                                                            .location
                                                            .map(|l| view! { <p class="text-gray-500 text-sm">{l}</p> })}
                                                    </div>
                                                </div>
                                                <span class="text-gray-400 text-sm font-mono">{role.period}</span>
                                            </div>
                                            <p class="text-gray-400 mb-4">{role.description}</p>
                                            <Show when=is_open>
                                                <div class="border-t border-accent-cyan/20 pt-4 mt-4 expand-in">
                                                    <h4 class="text-accent-cyan font-semibold mb-3">"Key Achievements:"</h4>
                                                    <ul class="space-y-2 mb-4">
                                                        {role
                                                            .achievements
                                                            .iter()
                                                            .map(|a| {
                                                                view! {
                                                                    <li class="flex items-start gap-2 text-gray-300">
                                                                        <span class="text-accent-cyan mt-1">"▹"</span>
                                                                        <span>{*a}</span>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                    <div class="flex flex-wrap gap-2">
                                                        {role
                                                            .technologies
                                                            .iter()
                                                            .map(|t| {
                                                                view! {
                                                                    <span class="px-3 py-1 bg-accent-cyan/10 text-accent-cyan rounded-full text-sm font-mono border border-accent-cyan/20">
                                                                        {*t}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            </Show>
                                            <div class="mt-4 text-sm text-gray-500 font-mono">
                                                {move || {
                                                    if is_open() { "▲ Click to collapse" } else { "▼ Click to expand" }
                                                }}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

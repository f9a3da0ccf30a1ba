//! About section: bio paragraphs, core interests, stats, and contact card.

use leptos::prelude::*;

const INTERESTS: &[&str] = &[
    "Agentic AI and automation architecture",
    "Workflow orchestration using n8n and APIs",
    "Integrating AI into modern web applications",
    "Experimenting with real-world business automations (finance, retail, operations)",
];

const STATS: &[(&str, &str)] = &[
    ("3+", "Years Experience"),
    ("10+", "Technologies"),
    ("2", "SaaS Platforms"),
    ("3.83", "GPA"),
];

const CONTACT_LINES: &[&str] = &[
    "Chicago, Illinois, US",
    "+1 312-843-2216",
    "krishkrishnan2001@gmail.com",
];

/// About section.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section--alt">
            <div class="section__inner">
                <h2 class="section__title">"About Me"</h2>

                <div class="about__columns">
                    <div class="about__bio">
                        <h3 class="about__heading">"Building the Future of Agentic AI"</h3>
                        <p>
                            "The next wave of technology is agentic — systems that think, decide, and act autonomously."
                        </p>
                        <p>
                            "I'm passionate about building AI-driven and agentic workflows that connect systems, automate complex processes, and create intelligent decision-making layers for businesses."
                        </p>
                        <p>
                            "With hands-on experience in web development (Next.js, Angular, Node.js) and a growing focus on AI automation tools like n8n and OpenAI, I enjoy experimenting with how AI agents can replace repetitive operations and augment human capabilities."
                        </p>

                        <h4 class="about__subheading">"Core Interests:"</h4>
                        <ul class="about__interests">
                            {INTERESTS
                                .iter()
                                .map(|interest| view! { <li>{*interest}</li> })
                                .collect::<Vec<_>>()}
                        </ul>

                        <div class="about__stats">
                            {STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="about__stat">
                                            <h4 class="about__stat-value">{*value}</h4>
                                            <p class="about__stat-label">{*label}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="about__card">
                        <h4 class="about__subheading">"Contact Information"</h4>
                        {CONTACT_LINES
                            .iter()
                            .map(|line| view! { <div class="about__contact-line">{*line}</div> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

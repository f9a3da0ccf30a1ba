//! Skills section: technology categories rendered as tag grids.

use leptos::prelude::*;

struct SkillCategory {
    title: &'static str,
    skills: &'static [&'static str],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &["HTML 5", "CSS 3", "JavaScript", "TypeScript", "Python", ".NET"],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        skills: &["React JS", "Angular", "Vue JS", "Next JS", "Astro", "Blazor", "jQuery"],
    },
    SkillCategory {
        title: "AI & Automation",
        skills: &["OpenAI", "n8n", "Agentic Systems", "Workflow Orchestration", "AI Integration"],
    },
    SkillCategory {
        title: "State Management",
        skills: &["Redux", "Vuex", "RxJS", "Context API"],
    },
    SkillCategory {
        title: "Back-End & Databases",
        skills: &["Node.js", "GraphQL", "MongoDB", "MySQL"],
    },
    SkillCategory {
        title: "Tools & Deployment",
        skills: &["Git", "GitHub", "Azure", "Vercel", "Postman"],
    },
];

/// Technical skills section.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section">
            <div class="section__inner">
                <h2 class="section__title">"Technical Skills"</h2>
                <div class="skills__grid">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="skills__card">
                                    <h3 class="skills__category">{category.title}</h3>
                                    <div class="skills__tags">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! { <span class="skills__tag">{*skill}</span> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

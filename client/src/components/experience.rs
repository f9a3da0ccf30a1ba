//! Work experience section rendered as a vertical timeline.

use leptos::prelude::*;

struct Job {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    date: &'static str,
    subtitle: Option<&'static str>,
    points: &'static [&'static str],
}

const JOBS: &[Job] = &[
    Job {
        title: "Front-End Web Developer Intern",
        company: "AIFS",
        location: "Naperville, Illinois",
        date: "June 2025 - August 2025",
        subtitle: None,
        points: &[
            "Built SEO-friendly websites using Astro with best practices for performance and discoverability",
            "Developed web applications using Blazor, creating responsive and scalable UIs",
            "Set up CI/CD pipelines on Azure App Service to automate deployment and streamline development",
            "Collaborated with teams to deliver optimized and production-ready web solutions",
        ],
    },
    Job {
        title: "Frontend Developer",
        company: "GoWebEz",
        location: "Chennai, India",
        date: "March 2021 - December 2023",
        subtitle: Some("Inflowcare & Language Dynamic Groups - SaaS Platforms"),
        points: &[
            "Modernized a legacy jQuery app to a scalable React.js architecture with Redux and Tailwind CSS",
            "Built interactive Vue.js components and managed state using Vuex for an education platform",
            "Integrated RESTful APIs with MongoDB and MySQL for real-time data handling",
            "Enabled features for healthcare staff scheduling, academic assessments, and progress tracking",
            "Collaborated with U.S.-based cross-functional teams in agile sprints, focusing on performance, security, and accessibility",
        ],
    },
];

/// Work experience timeline.
#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="section section--alt">
            <div class="section__inner">
                <h2 class="section__title">"Work Experience"</h2>
                <div class="experience__timeline">
                    {JOBS
                        .iter()
                        .map(|job| {
                            view! {
                                <div class="experience__entry">
                                    <div class="experience__card">
                                        <h3 class="experience__title">{job.title}</h3>
                                        <p class="experience__company">
                                            {job.company} " | " {job.location}
                                        </p>
                                        <p class="experience__date">{job.date}</p>
                                        {job
                                            .subtitle
                                            .map(|subtitle| {
                                                view! {
                                                    <p class="experience__subtitle">{subtitle}</p>
                                                }
                                            })}
                                        <ul class="experience__points">
                                            {job
                                                .points
                                                .iter()
                                                .map(|point| view! { <li>{*point}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
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

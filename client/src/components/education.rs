//! Education section listing degrees.

use leptos::prelude::*;

struct School {
    school: &'static str,
    degree: &'static str,
    field: &'static str,
    date: &'static str,
    gpa: Option<&'static str>,
}

const SCHOOLS: &[School] = &[
    School {
        school: "Illinois Institute of Technology",
        degree: "Master's Degree",
        field: "Information Technology & Development (Web Design & Application Development)",
        date: "January 2024 - December 2025",
        gpa: Some("3.83"),
    },
    School {
        school: "Dhanalakshmi College of Engineering",
        degree: "Bachelor of Engineering",
        field: "Electrical, Electronics and Communications Engineering",
        date: "2017 - 2021",
        gpa: None,
    },
];

/// Education section.
#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="section">
            <div class="section__inner">
                <h2 class="section__title">"Education"</h2>
                <div class="education__list">
                    {SCHOOLS
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="education__card">
                                    <h3 class="education__school">{entry.school}</h3>
                                    <p class="education__degree">{entry.degree}</p>
                                    <p class="education__field">{entry.field}</p>
                                    <p class="education__date">{entry.date}</p>
                                    {entry
                                        .gpa
                                        .map(|gpa| {
                                            view! {
                                                <span class="education__gpa">"GPA: " {gpa}</span>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

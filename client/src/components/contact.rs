//! Contact section with email and social links.

use leptos::prelude::*;

struct ContactCard {
    title: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        value: "krishkrishnan2001@gmail.com",
        href: "mailto:krishkrishnan2001@gmail.com",
    },
    ContactCard {
        title: "LinkedIn",
        value: "Connect with me",
        href: "https://www.linkedin.com/in/krishna-sridhar-ba947a1b0",
    },
    ContactCard {
        title: "GitHub",
        value: "View my projects",
        href: "#",
    },
];

/// Contact section.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section section--accent">
            <div class="section__inner">
                <h2 class="section__title">"Let's Connect"</h2>
                <p class="contact__lead">
                    "Let's connect if you're working in AI, agentic systems, or automation — or just exploring how intelligent workflows can reshape the future of work."
                </p>
                <div class="contact__cards">
                    {CONTACT_CARDS
                        .iter()
                        .map(|card| {
                            let external = card.href.starts_with("http");
                            view! {
                                <a
                                    href=card.href
                                    class="contact__card"
                                    target=if external { "_blank" } else { "_self" }
                                    rel=if external { "noopener noreferrer" } else { "" }
                                >
                                    <h4 class="contact__card-title">{card.title}</h4>
                                    <p class="contact__card-value">{card.value}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

//! Hero section with name, tagline, and call-to-action links.

use leptos::prelude::*;

/// Full-height hero section.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <h1 class="hero__name">"Krishna Prasanth Sridhar"</h1>
                <p class="hero__role">"AI & Automation Engineer"</p>
                <p class="hero__tagline">
                    "Exploring Agentic Systems and Workflow Orchestration | Bridging Code and Intelligence"
                </p>
                <div class="hero__actions">
                    <a href="#contact" class="btn btn--light">
                        "Get In Touch"
                    </a>
                    <a href="#experience" class="btn btn--outline">
                        "View My Work"
                    </a>
                </div>
            </div>
        </section>
    }
}

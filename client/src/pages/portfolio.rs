//! Portfolio page — a single scrollable page assembling all sections.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::chat_widget::ChatWidget;
use crate::components::contact::Contact;
use crate::components::education::Education;
use crate::components::experience::Experience;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::site_footer::SiteFooter;
use crate::components::skills::Skills;

/// The portfolio page: nav, content sections in scroll order, footer, and
/// the floating chat widget.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="portfolio-page">
            <NavBar/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Experience/>
                <Education/>
                <Contact/>
            </main>
            <SiteFooter/>
            <ChatWidget/>
        </div>
    }
}

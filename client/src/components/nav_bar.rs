//! Fixed navigation bar with anchor links to the page sections.

use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Education", "#education"),
    ("Contact", "#contact"),
];

/// Navigation bar. Condenses once the page scrolls past the threshold;
/// the scroll listener is attached on mount and removed on cleanup.
#[component]
pub fn NavBar() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll;

        let listener = scroll::ScrollListener::attach(move |y| {
            scrolled.set(scroll::is_condensed(y));
        });
        on_cleanup(move || drop(listener));
    }

    view! {
        <nav class="nav" class:nav--condensed=move || scrolled.get()>
            <div class="nav__inner">
                <a href="#home" class="nav__logo">
                    "KP"
                </a>
                <ul class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a href=*href class="nav__link">
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}

//! Page footer.

use leptos::prelude::*;

/// Footer with the copyright line.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__line">"© 2024 Krishna Prasanth Sridhar"</p>
        </footer>
    }
}

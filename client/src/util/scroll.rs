//! Window scroll tracking for the navigation bar.
//!
//! The original site toggled its condensed nav style from an ambient
//! window scroll listener; here the listener is an explicit guard owned
//! by the component, removed when the guard drops.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset past which the nav switches to its condensed style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the nav should render condensed at the given scroll offset.
pub fn is_condensed(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Guard for a `scroll` listener on the window. Dropping it removes the
/// listener, so component cleanup defines the listener lifecycle.
#[cfg(feature = "hydrate")]
pub struct ScrollListener {
    closure: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(feature = "hydrate")]
impl ScrollListener {
    /// Attach a scroll listener reporting the current vertical offset.
    /// Returns `None` outside a browser environment.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let reader = window.clone();
        let closure = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let y = reader.scroll_y().unwrap_or(0.0);
            on_scroll(y);
        });
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}

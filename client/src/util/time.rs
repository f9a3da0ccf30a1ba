//! Wall-clock access. Requires a browser environment; the SSR build
//! returns the epoch so hydration fills in real values.

/// Current time in ms since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

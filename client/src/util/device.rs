//! Client-identifying string sent as `device_name` with auth requests.

pub const FALLBACK_DEVICE_NAME: &str = "storefront-web";

/// The browser user agent, or [`FALLBACK_DEVICE_NAME`] when unavailable.
pub fn device_name() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_DEVICE_NAME.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_DEVICE_NAME.to_owned()
    }
}

//! Browser navigation capability.
//!
//! The facade never touches `location.href` directly; it goes through this
//! trait so tests can record navigations instead of leaving the page.

use log::warn;

/// Something that can read the page origin and drive top-level navigation.
pub trait Navigator {
    /// Scheme + host + port of the current page, e.g. `https://booking.app`.
    fn origin(&self) -> String;

    /// Point the browser at `url`, replacing the current page.
    fn navigate_to(&self, url: &str);
}

/// [`Navigator`] over the real `window.location`. Requires a browser
/// environment; off-browser the methods degrade to no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn origin(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn navigate_to(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    warn!("navigation to {url} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            warn!("navigation to {url} ignored outside the browser");
        }
    }
}

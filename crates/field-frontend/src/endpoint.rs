//! Rosbridge endpoint selection
//!
//! Desktop clients talk to a bridge on the same machine. Phones and tablets
//! load the page from the robot's network, so they reach the bridge on the
//! host that served the page.

use crate::config::ConnectionConfig;

const MOBILE_MARKERS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "mobile",
    "blackberry",
    "opera mini",
    "iemobile",
];

/// What the browser tells us about the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub user_agent: String,
    /// Host name the page was served from, without port
    pub hostname: String,
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Pick the WebSocket URL for this client.
pub fn select_endpoint(config: &ConnectionConfig, page: Option<&PageInfo>) -> String {
    match page {
        Some(page) if is_mobile_user_agent(&page.user_agent) && !page.hostname.is_empty() => {
            format!("ws://{}:{}", page.hostname, config.mobile_port)
        }
        _ => config.desktop_url.clone(),
    }
}

/// Native builds are always desktop clients.
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_page() -> Option<PageInfo> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn detect_page() -> Option<PageInfo> {
    let window = web_sys::window()?;
    let user_agent = window.navigator().user_agent().ok()?;
    let hostname = window.location().hostname().unwrap_or_default();
    Some(PageInfo {
        user_agent,
        hostname,
    })
}

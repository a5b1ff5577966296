//! Environment classifiers.
//!
//! Pure functions of the browser identification string and the
//! host-injected runtime marker. Nothing here caches: the adapter re-derives
//! every classifier from the live values on each call.

/// Marker value the host injects when the page runs in mini-program mode.
pub const MINI_PROGRAM_MARKER: &str = "miniprogram";

const IOS_TOKENS: [&str; 3] = ["iphone", "ipad", "ipod"];
const ANDROID_TOKEN: &str = "android";
const HOST_APP_TOKEN: &str = "micromessenger";
const DEVTOOLS_TOKEN: &str = "wechatdevtools";

fn contains_token(identification: &str, token: &str) -> bool {
    identification.to_ascii_lowercase().contains(token)
}

/// Running on an iOS device.
pub fn is_ios(identification: &str) -> bool {
    IOS_TOKENS
        .iter()
        .any(|token| contains_token(identification, token))
}

/// Running on an Android device.
pub fn is_android(identification: &str) -> bool {
    contains_token(identification, ANDROID_TOKEN)
}

/// Running inside the host application at all, in either runtime mode.
pub fn is_host_app(identification: &str) -> bool {
    contains_token(identification, HOST_APP_TOKEN)
}

/// Running in the host's ordinary in-app browser (not mini-program mode).
pub fn is_host_browser(identification: &str, marker: Option<&str>) -> bool {
    is_host_app(identification) && marker != Some(MINI_PROGRAM_MARKER)
}

/// Running inside the host's mini-program runtime.
pub fn is_mini_program(identification: &str, marker: Option<&str>) -> bool {
    is_host_app(identification) && marker == Some(MINI_PROGRAM_MARKER)
}

/// Running inside the host's developer simulator.
pub fn is_devtools(identification: &str) -> bool {
    contains_token(identification, DEVTOOLS_TOKEN)
}

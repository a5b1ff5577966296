//! Host response status normalization.
//!
//! Older host builds spell the status field `err_msg`, newer ones `errMsg`.
//! Both the invoke and event paths run responses through
//! [`normalize_status`] so the two call sites cannot diverge.

use host_traits::HostResponse;

/// Canonical spelling of the status field.
pub const STATUS_KEY: &str = "errMsg";
/// Legacy spelling still emitted by older host builds.
pub const LEGACY_STATUS_KEY: &str = "err_msg";

/// Renames the legacy status key to the canonical one.
///
/// Only applies when the canonical key is absent; a response that already
/// carries `errMsg` passes through untouched.
pub fn normalize_status(mut response: HostResponse) -> HostResponse {
    if !response.contains_key(STATUS_KEY) {
        if let Some(value) = response.remove(LEGACY_STATUS_KEY) {
            response.insert(STATUS_KEY.to_string(), value);
        }
    }
    response
}

/// Extracts the host's reason substring: the text after the first `:` of
/// the canonical status field (the whole field when it carries no colon).
///
/// Returns `None` when the response carries no usable status at all — the
/// host's way of signaling "nothing to report", which callers treat as a
/// successful empty result.
pub fn status_reason(response: &HostResponse) -> Option<&str> {
    let status = response.get(STATUS_KEY)?.as_str()?;
    Some(match status.split_once(':') {
        Some((_, reason)) => reason,
        None => status,
    })
}

/// Whether a reason substring denotes a successful outcome.
pub fn reason_is_success(reason: &str) -> bool {
    matches!(reason, "ok" | "confirm")
}

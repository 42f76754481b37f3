//! Audio event-path scheme
//!
//! Event paths are FMOD-style string tokens: a protocol prefix followed by
//! slash-delimited segments, e.g. `event:/music/lvl1/intro`. Only paths
//! carrying the prefix participate in randomization; everything else is
//! handed back to the host untouched.

/// Protocol prefix marking a path as a playable audio event.
pub const EVENT_PREFIX: &str = "event:/";

/// Check whether a path is an event path eligible for substitution.
#[inline]
pub fn is_event_path(path: &str) -> bool {
    path.starts_with(EVENT_PREFIX)
}

/// Extract the category of an event path.
///
/// The category is the segment between the first and second `/`, i.e. the
/// first path segment after the protocol prefix:
/// `event:/music/lvl1/intro` → `"music"`.
///
/// Paths with fewer than two separators have no category segment and fall
/// into the empty-string catch-all category. This is not an error.
pub fn event_category(path: &str) -> &str {
    let Some(first) = path.find('/') else {
        return "";
    };
    let rest = &path[first + 1..];
    match rest.find('/') {
        Some(second) => &rest[..second],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_event_path() {
        assert!(is_event_path("event:/music/lvl1/intro"));
        assert!(is_event_path("event:/"));
        assert!(!is_event_path("snapshot:/pause"));
        assert!(!is_event_path("bus:/music"));
        assert!(!is_event_path(""));
    }

    #[test]
    fn test_category_extraction() {
        assert_eq!(event_category("event:/music/lvl1/intro"), "music");
        assert_eq!(event_category("event:/sfx/ui/click"), "sfx");
        assert_eq!(event_category("event:/char/madeline/jump"), "char");
    }

    #[test]
    fn test_category_of_shallow_path() {
        // One segment after the prefix: no second separator, no category.
        assert_eq!(event_category("event:/loner"), "");
        assert_eq!(event_category("event:/"), "");
    }

    #[test]
    fn test_category_of_malformed_path() {
        assert_eq!(event_category("no-separators-at-all"), "");
        assert_eq!(event_category(""), "");
    }

    #[test]
    fn test_category_of_empty_segment() {
        // Double slash yields an empty first segment.
        assert_eq!(event_category("event://oops"), "");
    }
}

use std::sync::LazyLock;

use regex::Regex;

/// Accepted YouTube URL shapes. Each pattern captures the video id, whose
/// character class terminates at the first `&`, `?`, `/` or whitespace.
static VIDEO_URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]+)",
        r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/embed/([A-Za-z0-9_-]+)",
        r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/v/([A-Za-z0-9_-]+)",
        r"^(?:https?://)?youtu\.be/([A-Za-z0-9_-]+)",
        r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/shorts/([A-Za-z0-9_-]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static pattern compiles"))
    .collect()
});

/// Whether a URL matches one of the known YouTube shapes
pub fn is_valid_youtube_url(url: &str) -> bool {
    extract_video_id(url).is_some()
}

/// Extract the video id from a YouTube URL, or `None` when no shape matches
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    VIDEO_URL_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
    })
}

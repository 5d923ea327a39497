// YouTube URL shape validation and video id extraction.

use promopay::modules::videos::{extract_video_id, is_valid_youtube_url};

#[test]
fn test_accepted_url_shapes() {
    assert!(is_valid_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_valid_youtube_url("http://youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_valid_youtube_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_valid_youtube_url("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    assert!(is_valid_youtube_url("https://www.youtube.com/v/dQw4w9WgXcQ"));
    assert!(is_valid_youtube_url("https://youtu.be/abc123"));
    assert!(is_valid_youtube_url("https://www.youtube.com/shorts/abc123"));
    assert!(is_valid_youtube_url("youtube.com/watch?v=dQw4w9WgXcQ"));
}

#[test]
fn test_rejected_urls() {
    assert!(!is_valid_youtube_url("https://vimeo.com/123"));
    assert!(!is_valid_youtube_url("https://dailymotion.com/video/x7"));
    assert!(!is_valid_youtube_url("https://youtube.example.com/watch?v=abc"));
    assert!(!is_valid_youtube_url("https://www.youtube.com/playlist?list=PL1"));
    assert!(!is_valid_youtube_url("just some words"));
    assert!(!is_valid_youtube_url(""));
    assert!(!is_valid_youtube_url("   "));
}

#[test]
fn test_id_extraction_stops_at_delimiters() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=XYZ123&t=30").as_deref(),
        Some("XYZ123")
    );
    assert_eq!(
        extract_video_id("https://youtu.be/abc123?si=share").as_deref(),
        Some("abc123")
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/abc123/extra").as_deref(),
        Some("abc123")
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/shorts/abc123?feature=share").as_deref(),
        Some("abc123")
    );
}

#[test]
fn test_extraction_handles_parameter_order() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?list=PL1&v=abc_DEF-9&t=1").as_deref(),
        Some("abc_DEF-9")
    );
}

#[test]
fn test_extraction_returns_none_when_no_shape_matches() {
    assert_eq!(extract_video_id("https://vimeo.com/123"), None);
    assert_eq!(extract_video_id("https://www.youtube.com/watch?t=30"), None);
    assert_eq!(extract_video_id(""), None);
}

#[test]
fn test_ids_preserve_case_and_symbols() {
    assert_eq!(
        extract_video_id("https://youtu.be/aB3_x-Y9z01").as_deref(),
        Some("aB3_x-Y9z01")
    );
}

pub mod url_parser;

pub use url_parser::{extract_video_id, is_valid_youtube_url};

// Videos module: YouTube URL validation for promotion orders

pub mod services;

pub use services::{extract_video_id, is_valid_youtube_url};

use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use std::env;

lazy_static! {
    pub static ref YOUTUBE_API_KEY: String =
        env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY environment variable must be set");
    pub static ref CAPTION_LANGUAGE: String =
        env::var("CAPTION_LANGUAGE").unwrap_or_else(|_| "en".to_string());
    pub static ref MAX_RESULTS: usize = env::var("MAX_RESULTS")
        .unwrap_or_else(|_| "500".to_string())
        .parse::<usize>()
        .unwrap_or(500);
    pub static ref OUTPUT_FILE: String =
        env::var("OUTPUT_FILE").unwrap_or_else(|_| "youtube_videos.csv".to_string());
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting YouTube video export...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

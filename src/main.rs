mod config;
mod models;
mod services;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::config::{MAX_RESULTS, OUTPUT_FILE};
use crate::services::{crawler, export};

#[tokio::main]
async fn main() -> Result<()> {
    config::load_environment();
    config::init_logger();

    let query = prompt_for_query()?;
    info!("Fetching top videos for genre: {query}");

    let records = crawler::fetch_top_videos(&query, *MAX_RESULTS).await;
    info!("Collected {} videos", records.len());

    export::save_to_csv(&records, Path::new(OUTPUT_FILE.as_str()))?;

    Ok(())
}

fn prompt_for_query() -> io::Result<String> {
    print!("Enter a genre or search term: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

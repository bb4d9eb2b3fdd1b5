use crate::config::{CAPTION_LANGUAGE, YOUTUBE_API_KEY};
use crate::models::VideoRecord;
use crate::services::captions;
use anyhow::Result;
use log::{error, info};
use reqwest::Client;
use serde_json::Value;
use yt_transcript_rs::api::YouTubeTranscriptApi;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Hard per-request result cap imposed by the search endpoint.
pub const MAX_PAGE_SIZE: usize = 50;

/// Collect up to `max_results` videos matching `query`, caption text
/// included where the metadata advertises it.
///
/// Any API failure ends the crawl early; whatever was accumulated up to that
/// point is returned as a normal result.
pub async fn fetch_top_videos(query: &str, max_results: usize) -> Vec<VideoRecord> {
    let client = Client::new();
    let transcript_api = YouTubeTranscriptApi::new(None, None, None)
        .expect("Failed to create YouTubeTranscriptApi");
    let languages = [CAPTION_LANGUAGE.as_str()];

    let mut records: Vec<VideoRecord> = Vec::new();
    let mut page_token: Option<String> = None;

    while records.len() < max_results {
        let page_size = remaining_page_size(records.len(), max_results);
        let page = match search_page(&client, query, page_size, page_token.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                error!("An error occurred with the YouTube API: {e}");
                break;
            }
        };

        let video_ids = collect_video_ids(&page);
        if !video_ids.is_empty() {
            let details = match lookup_videos(&client, &video_ids).await {
                Ok(details) => details,
                Err(e) => {
                    error!("An error occurred with the YouTube API: {e}");
                    break;
                }
            };

            if let Some(items) = details["items"].as_array() {
                for item in items {
                    let mut record = VideoRecord::from_api_item(item);
                    if record.has_captions() {
                        let video_id = item["id"].as_str().unwrap_or_default();
                        record.caption_text =
                            captions::resolve_caption_text(&transcript_api, video_id, &languages)
                                .await;
                    }
                    info!("Processed video: {} ({})", record.title, record.video_url);
                    records.push(record);
                }
            }
        }

        page_token = next_page_token(&page);
        if page_token.is_none() {
            break;
        }
    }

    records
}

// https://developers.google.com/youtube/v3/docs/search/list
async fn search_page(
    client: &Client,
    query: &str,
    page_size: usize,
    page_token: Option<&str>,
) -> Result<Value> {
    let mut params = vec![
        ("part", "id,snippet".to_string()),
        ("q", query.to_string()),
        ("type", "video".to_string()),
        ("maxResults", page_size.to_string()),
        ("key", YOUTUBE_API_KEY.clone()),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }

    let response = client
        .get(SEARCH_ENDPOINT)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(response)
}

// https://developers.google.com/youtube/v3/docs/videos/list
async fn lookup_videos(client: &Client, video_ids: &[String]) -> Result<Value> {
    let params = [
        ("id", video_ids.join(",")),
        (
            "part",
            "snippet,statistics,contentDetails,recordingDetails".to_string(),
        ),
        ("key", YOUTUBE_API_KEY.clone()),
    ];

    let response = client
        .get(VIDEOS_ENDPOINT)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(response)
}

fn collect_video_ids(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"]["videoId"].as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn next_page_token(page: &Value) -> Option<String> {
    page["nextPageToken"].as_str().map(String::from)
}

fn remaining_page_size(collected: usize, target: usize) -> usize {
    MAX_PAGE_SIZE.min(target.saturating_sub(collected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_page_fixture(ids: &[&str], token: Option<&str>) -> Value {
        let items: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": {"kind": "youtube#video", "videoId": id}}))
            .collect();

        match token {
            Some(token) => json!({"items": items, "nextPageToken": token}),
            None => json!({"items": items}),
        }
    }

    #[test]
    fn collects_ids_in_page_order() {
        let page = search_page_fixture(&["dQw4w9WgXcQ", "jNQXAC9MKEB"], Some("CAoQAA"));
        assert_eq!(collect_video_ids(&page), vec!["dQw4w9WgXcQ", "jNQXAC9MKEB"]);
    }

    #[test]
    fn skips_items_without_a_video_id() {
        let page = json!({
            "items": [
                {"id": {"kind": "youtube#channel", "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw"}},
                {"id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"}}
            ]
        });
        assert_eq!(collect_video_ids(&page), vec!["dQw4w9WgXcQ"]);
    }

    #[test]
    fn empty_page_yields_no_ids() {
        assert!(collect_video_ids(&json!({"items": []})).is_empty());
        assert!(collect_video_ids(&json!({})).is_empty());
    }

    #[test]
    fn page_token_is_forwarded_until_the_last_page() {
        let first = search_page_fixture(&["a_aaaaaaaaa", "b_bbbbbbbbb"], Some("CAoQAA"));
        let last = search_page_fixture(&["c_ccccccccc"], None);

        assert_eq!(next_page_token(&first), Some("CAoQAA".to_string()));
        assert_eq!(next_page_token(&last), None);
    }

    #[test]
    fn page_size_tracks_the_remaining_target() {
        assert_eq!(remaining_page_size(0, 500), 50);
        assert_eq!(remaining_page_size(460, 500), 40);
        assert_eq!(remaining_page_size(499, 500), 1);
        assert_eq!(remaining_page_size(500, 500), 0);
        assert_eq!(remaining_page_size(501, 500), 0);
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One flattened video entry, fields in CSV column order.
///
/// Every field is kept as the string the API returned; the two counters
/// default to "0" when the provider omits them, everything else to "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "Video URL")]
    pub video_url: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Channel Title")]
    pub channel_title: String,
    #[serde(rename = "Keyword Tags")]
    pub keyword_tags: String,
    #[serde(rename = "YouTube Video Category")]
    pub category_id: String,
    #[serde(rename = "Topic Details")]
    pub topic_details: String,
    #[serde(rename = "Video Published At")]
    pub published_at: String,
    #[serde(rename = "Video Duration")]
    pub duration: String,
    #[serde(rename = "View Count")]
    pub view_count: String,
    #[serde(rename = "Comment Count")]
    pub comment_count: String,
    #[serde(rename = "Captions Available")]
    pub captions_available: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Caption Text")]
    pub caption_text: String,
}

impl VideoRecord {
    /// Flatten one `videos.list` item. The caption text is filled in by the
    /// crawl loop afterwards, when the video advertises captions at all.
    pub fn from_api_item(item: &Value) -> Self {
        let video_id = item["id"].as_str().unwrap_or("");

        VideoRecord {
            video_url: format!("https://www.youtube.com/watch?v={video_id}"),
            title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
            description: item["snippet"]["description"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            channel_title: item["snippet"]["channelTitle"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            keyword_tags: join_string_list(&item["snippet"]["tags"]),
            category_id: item["snippet"]["categoryId"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            topic_details: join_string_list(&item["topicDetails"]["topicCategories"]),
            published_at: item["snippet"]["publishedAt"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            duration: item["contentDetails"]["duration"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            view_count: item["statistics"]["viewCount"]
                .as_str()
                .unwrap_or("0")
                .to_string(),
            comment_count: item["statistics"]["commentCount"]
                .as_str()
                .unwrap_or("0")
                .to_string(),
            captions_available: if item["contentDetails"]["caption"].as_str() == Some("true") {
                "true".to_string()
            } else {
                "false".to_string()
            },
            location: item["recordingDetails"]["locationDescription"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            caption_text: String::new(),
        }
    }

    pub fn has_captions(&self) -> bool {
        self.captions_available == "true"
    }
}

fn join_string_list(value: &Value) -> String {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

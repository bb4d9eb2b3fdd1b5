use log::error;
use thiserror::Error;
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Substituted for the caption text whenever a transcript cannot be fetched.
pub const NO_CAPTIONS_PLACEHOLDER: &str = "No captions available.";

/// Why a transcript lookup produced no text.
///
/// The kinds are diagnostic only: the crawl loop collapses all of them to
/// [`NO_CAPTIONS_PLACEHOLDER`] and moves on to the next video.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    #[error("no transcript found for the requested languages")]
    NoTranscriptFound,
    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,
    #[error("no transcripts are available for this video")]
    NoTranscriptAvailable,
    #[error("video is unavailable")]
    VideoUnavailable,
    #[error("unexpected transcript failure: {0}")]
    Unexpected(String),
}

/// Fetch the transcript for one video and join its snippet texts with
/// single spaces, in playback order.
pub async fn fetch_caption_text(
    api: &YouTubeTranscriptApi,
    video_id: &str,
    languages: &[&str],
) -> Result<String, CaptionError> {
    match api.fetch_transcript(video_id, languages, false).await {
        Ok(transcript) => {
            let mut parts = Vec::new();
            for entry in transcript {
                parts.push(entry.text);
            }
            Ok(parts.join(" "))
        }
        Err(e) => Err(classify_failure(&e.to_string())),
    }
}

/// Like [`fetch_caption_text`], but with every failure logged and collapsed
/// to the placeholder text so the caller can keep crawling.
pub async fn resolve_caption_text(
    api: &YouTubeTranscriptApi,
    video_id: &str,
    languages: &[&str],
) -> String {
    match fetch_caption_text(api, video_id, languages).await {
        Ok(text) => text,
        Err(kind) => {
            error!("Captions for video ID {video_id}: {kind}");
            NO_CAPTIONS_PLACEHOLDER.to_string()
        }
    }
}

// The transcript library reports every failure through one error type; the
// rendered message is the only stable discriminator between the provider
// conditions we care to tell apart.
fn classify_failure(message: &str) -> CaptionError {
    let lowered = message.to_lowercase();

    if lowered.contains("disabled") {
        CaptionError::TranscriptsDisabled
    } else if lowered.contains("no transcripts are available") {
        CaptionError::NoTranscriptAvailable
    } else if lowered.contains("unavailable") || lowered.contains("no longer available") {
        CaptionError::VideoUnavailable
    } else if lowered.contains("no transcript") {
        CaptionError::NoTranscriptFound
    } else {
        CaptionError::Unexpected(message.to_string())
    }
}

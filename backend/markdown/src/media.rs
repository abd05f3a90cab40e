//! Media detection for autolinked URLs.
//!
//! Classification looks only at the path suffix: query string and fragment
//! are ignored and the comparison is case-insensitive.

use serde::{Deserialize, Serialize};

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a", "flac"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// Classify a URL by the file extension of its path.
///
/// Returns `None` for anything that should render as a plain link.
pub fn classify_media_url(url: &str) -> Option<MediaKind> {
    let ext = path_extension(url)?.to_ascii_lowercase();

    if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Audio)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Extension of the last path segment, without query or fragment.
///
/// The scheme and authority are skipped first, so a host name such as
/// `get.mov` is never mistaken for a file name.
fn path_extension(url: &str) -> Option<&str> {
    let url = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let (_authority, path) = after_scheme.split_once('/')?;
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

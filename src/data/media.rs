//! Media reference classification.

/// The kind of a media reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A still image or GIF.
    Image,
    /// A playable video.
    Video,
}

impl MediaKind {
    /// Short badge text for cards and the detail overlay.
    pub fn badge(&self) -> &'static str {
        match self {
            MediaKind::Image => "IMG",
            MediaKind::Video => "VID",
        }
    }
}

/// A resolved media reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub url: String,
    pub kind: MediaKind,
}

/// A reference is a video only when it ends in the `.mp4` extension.
pub fn is_video(url: &str) -> bool {
    url.ends_with(".mp4")
}

/// Resolve a media reference for display.
///
/// An empty or blank reference is unresolvable; the media element is hidden
/// in place (`None`) rather than treated as an error, and the rest of the
/// card or overlay still renders.
pub fn resolve(url: &str) -> Option<MediaRef> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let kind = if is_video(url) { MediaKind::Video } else { MediaKind::Image };
    Some(MediaRef { url: url.to_string(), kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video_only_for_mp4() {
        assert!(is_video("https://cdn.example/clip.mp4"));
        assert!(!is_video("https://cdn.example/clip.png"));
        assert!(!is_video("https://cdn.example/clip.gif"));
        assert!(!is_video("https://cdn.example/clip.mp4.png"));
    }

    #[test]
    fn test_resolve_blank_is_hidden() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn test_resolve_kinds() {
        let image = resolve("a.gif").unwrap();
        assert_eq!(image.kind, MediaKind::Image);

        let video = resolve("a.mp4").unwrap();
        assert_eq!(video.kind, MediaKind::Video);
        assert_eq!(video.url, "a.mp4");
    }
}

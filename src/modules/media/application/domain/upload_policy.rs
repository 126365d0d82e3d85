/// What the operator claims to be uploading. The claim picks the MIME
/// allow-list and size cap the policy enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PolicyViolation {
    #[error("Empty file")]
    EmptyFile,

    #[error("File exceeds the {limit_bytes} byte limit for {kind}")]
    FileTooLarge { kind: &'static str, limit_bytes: u64 },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File name too long")]
    FileNameTooLong,

    #[error("File name cannot be empty")]
    EmptyFileName,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_image_bytes: u64,
    pub max_video_bytes: u64,
    pub max_file_name_len: usize,
    pub bucket_name: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "portfolio-media-upload";
    pub const IMAGE_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const VIDEO_MIME_TYPES: &'static [&'static str] = &["video/mp4", "video/webm"];

    /// Bucket name comes from `MEDIA_UPLOAD_BUCKET`; everything else is fixed.
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("MEDIA_UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        Self::new(bucket_name)
    }

    pub fn new(bucket_name: String) -> Self {
        Self {
            max_image_bytes: 10 * 1024 * 1024,
            max_video_bytes: 100 * 1024 * 1024,
            max_file_name_len: 255,
            bucket_name,
        }
    }

    pub fn check(
        &self,
        kind: MediaKind,
        content_type: &str,
        file_name: &str,
        size_bytes: u64,
    ) -> Result<(), PolicyViolation> {
        if file_name.trim().is_empty() {
            return Err(PolicyViolation::EmptyFileName);
        }
        if file_name.len() > self.max_file_name_len {
            return Err(PolicyViolation::FileNameTooLong);
        }
        if size_bytes == 0 {
            return Err(PolicyViolation::EmptyFile);
        }

        let (allowed, limit) = match kind {
            MediaKind::Image => (Self::IMAGE_MIME_TYPES, self.max_image_bytes),
            MediaKind::Video => (Self::VIDEO_MIME_TYPES, self.max_video_bytes),
        };

        if !allowed.contains(&content_type) {
            return Err(PolicyViolation::UnsupportedMediaType(
                content_type.to_string(),
            ));
        }
        if size_bytes > limit {
            return Err(PolicyViolation::FileTooLarge {
                kind: kind.as_str(),
                limit_bytes: limit,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UploadPolicy {
        UploadPolicy::new("test-bucket".to_string())
    }

    #[test]
    fn accepts_a_normal_image() {
        policy()
            .check(MediaKind::Image, "image/png", "photo.png", 1024)
            .unwrap();
    }

    #[test]
    fn rejects_a_video_mime_under_the_image_kind() {
        let err = policy()
            .check(MediaKind::Image, "video/mp4", "clip.mp4", 1024)
            .unwrap_err();
        assert!(matches!(err, PolicyViolation::UnsupportedMediaType(_)));
    }

    #[test]
    fn image_and_video_size_caps_differ() {
        let p = policy();

        let too_big_for_image = p.max_image_bytes + 1;
        assert!(matches!(
            p.check(MediaKind::Image, "image/png", "a.png", too_big_for_image),
            Err(PolicyViolation::FileTooLarge { kind: "image", .. })
        ));

        // The same size is fine as a video
        p.check(MediaKind::Video, "video/mp4", "a.mp4", too_big_for_image)
            .unwrap();
    }

    #[test]
    fn rejects_empty_payloads_and_bad_names() {
        let p = policy();

        assert!(matches!(
            p.check(MediaKind::Image, "image/png", "a.png", 0),
            Err(PolicyViolation::EmptyFile)
        ));
        assert!(matches!(
            p.check(MediaKind::Image, "image/png", "  ", 10),
            Err(PolicyViolation::EmptyFileName)
        ));
        assert!(matches!(
            p.check(MediaKind::Image, "image/png", &"x".repeat(300), 10),
            Err(PolicyViolation::FileNameTooLong)
        ));
    }

    #[test]
    fn kind_parsing_is_exact() {
        assert_eq!(MediaKind::parse("image"), Some(MediaKind::Image));
        assert_eq!(MediaKind::parse("video"), Some(MediaKind::Video));
        assert_eq!(MediaKind::parse("Image"), None);
        assert_eq!(MediaKind::parse("audio"), None);
    }
}

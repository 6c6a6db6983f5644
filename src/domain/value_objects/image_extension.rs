use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Bmp,
    Webp,
}

impl ImageExtension {
    pub const ALL: [ImageExtension; 6] = [
        ImageExtension::Jpg,
        ImageExtension::Jpeg,
        ImageExtension::Png,
        ImageExtension::Gif,
        ImageExtension::Bmp,
        ImageExtension::Webp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Png => "png",
            ImageExtension::Gif => "gif",
            ImageExtension::Bmp => "bmp",
            ImageExtension::Webp => "webp",
        }
    }

    /// Case-insensitive lookup of an extension given without the leading dot.
    pub fn parse(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(extension))
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

pub fn is_allowed_image(file_name: &str) -> bool {
    ImageExtension::from_file_name(file_name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        for name in [
            "a.jpg", "a.jpeg", "a.png", "a.gif", "a.bmp", "a.webp",
        ] {
            assert!(is_allowed_image(name), "{} should be allowed", name);
        }
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(
            ImageExtension::from_file_name("HOLIDAY.JPG"),
            Some(ImageExtension::Jpg)
        );
        assert!(is_allowed_image("scan.WebP"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!is_allowed_image("notes.txt"));
        assert!(!is_allowed_image("report.pdf"));
        assert!(!is_allowed_image("archive.png.zip"));
        assert!(!is_allowed_image("png"));
        assert!(!is_allowed_image(""));
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(
            ImageExtension::from_file_name("backup.tar.gif"),
            Some(ImageExtension::Gif)
        );
    }
}

use std::path::{Path, PathBuf};

use crate::domain::value_objects::image_extension::is_allowed_image;

pub const PUBLIC_URL_PREFIX: &str = "/uploads/";

/// The flat directory uploaded images live in. Filenames inside it double as
/// image identifiers and as the last segment of their public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRoot {
    path: PathBuf,
}

impl UploadRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates a user-supplied filename and joins it under the root.
    ///
    /// Returns `None` for empty names, names carrying any directory component
    /// (`../x.png`, `a/b.png`, `a\b.png`, `..`) and names without an allowed
    /// image extension. Performs no I/O.
    pub fn resolve(&self, raw_name: &str) -> Option<PathBuf> {
        if raw_name.is_empty() {
            return None;
        }

        if raw_name.contains(['/', '\\']) {
            return None;
        }

        let base = Path::new(raw_name).file_name()?;
        if base != raw_name {
            return None;
        }

        if !is_allowed_image(raw_name) {
            return None;
        }

        Some(self.path.join(base))
    }

    pub fn public_url(file_name: &str) -> String {
        format!("{}{}", PUBLIC_URL_PREFIX, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> UploadRoot {
        UploadRoot::new("/srv/uploads")
    }

    #[test]
    fn test_accepts_plain_image_name() {
        let path = root().resolve("photo.png").unwrap();
        assert_eq!(path, PathBuf::from("/srv/uploads/photo.png"));
        assert!(path.starts_with(root().path()));
        assert!(path.ends_with("photo.png"));
    }

    #[test]
    fn test_rejects_traversal() {
        assert_eq!(root().resolve("../secret.png"), None);
        assert_eq!(root().resolve("../../etc/passwd"), None);
        assert_eq!(root().resolve("..\\secret.png"), None);
        assert_eq!(root().resolve(".."), None);
        assert_eq!(root().resolve("."), None);
    }

    #[test]
    fn test_rejects_directory_components() {
        assert_eq!(root().resolve("nested/photo.png"), None);
        assert_eq!(root().resolve("/abs/photo.png"), None);
        assert_eq!(root().resolve("photo.png/"), None);
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(root().resolve(""), None);
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        assert_eq!(root().resolve("image.txt"), None);
        assert_eq!(root().resolve("no_extension"), None);
    }

    #[test]
    fn test_extension_check_ignores_case() {
        assert!(root().resolve("SHOUT.JPEG").is_some());
    }

    #[test]
    fn test_public_url() {
        assert_eq!(UploadRoot::public_url("a.png"), "/uploads/a.png");
    }
}

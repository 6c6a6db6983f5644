use chrono::{DateTime, Utc};

/// One qualifying file as the storage adapter found it on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    name: String,
    size_bytes: u64,
    modified_at: DateTime<Utc>,
}

impl StoredImage {
    pub fn new(name: String, size_bytes: u64, modified_at: DateTime<Utc>) -> Self {
        Self {
            name,
            size_bytes,
            modified_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}

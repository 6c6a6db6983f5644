use serde::{Serialize, Serializer};

const UNIT: u64 = 1024;
const UNIT_SUFFIXES: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileSize(u64);

impl FileSize {
    pub fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Binary (base-1024) rendering: whole bytes below 1 KB, two decimals above.
    pub fn human_readable(&self) -> String {
        let bytes = self.0;
        if bytes < UNIT {
            return format!("{} B", bytes);
        }

        let mut divisor = UNIT;
        let mut exponent = 0;
        let mut remaining = bytes / UNIT;
        while remaining >= UNIT {
            divisor *= UNIT;
            exponent += 1;
            remaining /= UNIT;
        }

        format!(
            "{:.2} {}",
            bytes as f64 / divisor as f64,
            UNIT_SUFFIXES[exponent]
        )
    }
}

impl std::fmt::Display for FileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.human_readable())
    }
}

impl Serialize for FileSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.human_readable())
    }
}

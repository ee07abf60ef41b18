use serde::{Deserialize, Serialize};

pub const SEQUENCE_ROUTE: &str = "/api/data";
pub const HEALTH_ROUTE: &str = "/healthz";

/// Verse count used when a request omits `verseCount`.
pub const DEFAULT_VERSE_COUNT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRequest {
    #[serde(default = "default_verse_count")]
    pub verse_count: i64,
}

impl SequenceRequest {
    pub fn new(verse_count: i64) -> Self {
        Self { verse_count }
    }
}

impl Default for SequenceRequest {
    fn default() -> Self {
        Self::new(DEFAULT_VERSE_COUNT)
    }
}

fn default_verse_count() -> i64 {
    DEFAULT_VERSE_COUNT
}

/// Chapter names in selection order. Serialized as a bare JSON array.
pub type ChapterSequence = Vec<String>;

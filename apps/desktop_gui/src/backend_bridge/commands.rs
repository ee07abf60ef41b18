//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchSequence { verse_count: i64 },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchSequence { .. } => "fetch_sequence",
        }
    }
}

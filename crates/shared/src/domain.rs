use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ChapterNumber);

/// One row of the chapter catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: ChapterNumber,
    pub name: String,
    pub verses: u32,
    pub words: u32,
}

impl Chapter {
    pub fn new(number: i64, name: impl Into<String>, verses: u32, words: u32) -> Self {
        Self {
            number: ChapterNumber(number),
            name: name.into(),
            verses,
            words,
        }
    }
}

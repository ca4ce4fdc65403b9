use {
    crate::{
        DecodeError,
        bank::{self, BankKind, Record},
        json,
    },
    foldhash::HashMap,
    serde::Serialize,
    serde_json::Value,
};

/// Dictionary entry for a single kanji character.
///
/// See [`dictionary-kanji-bank-v3-schema.json`](https://github.com/yomidevs/yomitan/blob/master/ext/data/schemas/dictionary-kanji-bank-v3-schema.json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kanji {
    /// Kanji character.
    pub character: String,
    /// On'yomi readings.
    pub onyomi: Vec<String>,
    /// Kun'yomi readings.
    pub kunyomi: Vec<String>,
    /// Tags for the kanji, by name.
    pub tags: Vec<String>,
    /// Meanings of the kanji.
    pub meanings: Vec<String>,
    /// Statistics about the kanji, keyed by the name of a tag in the
    /// dictionary's tag bank.
    pub stats: HashMap<String, String>,
}

impl Record for Kanji {
    const BANK: BankKind = BankKind::Kanji;
    const ARITY: usize = 6;

    fn from_fields(fields: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            character: bank::required_text(fields, 0, "character")?,
            onyomi: json::space_separated(bank::slot(fields, 1)),
            kunyomi: json::space_separated(bank::slot(fields, 2)),
            tags: json::space_separated(bank::slot(fields, 3)),
            meanings: json::string_array(bank::slot(fields, 4)),
            stats: json::string_map(bank::slot(fields, 5)),
        })
    }
}

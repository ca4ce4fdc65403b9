use {
    crate::{
        DecodeError,
        bank::{self, BankKind, Record},
    },
    serde::Serialize,
    serde_json::Value,
};

/// Categorises terms and kanji, referenced by name from their tag lists.
///
/// See [`dictionary-tag-bank-v3-schema.json`](https://github.com/yomidevs/yomitan/blob/master/ext/data/schemas/dictionary-tag-bank-v3-schema.json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Name which tag lists refer to this tag by.
    pub name: String,
    /// What category this tag is defined as.
    ///
    /// This is an arbitrary (or empty) string, but Yomitan has several
    /// built-in tag categories [listed here][tags].
    ///
    /// [tags]: https://github.com/yomidevs/yomitan/blob/09c55aeecd1d0912e3a664496a7a87640a41aa05/docs/making-yomitan-dictionaries.md#tag-categories
    pub category: String,
    /// Order of this tag relative to other tags in the same dictionary.
    ///
    /// A higher value means the tag will be displayed later. May be negative.
    pub order: i64,
    /// Human-readable description of what this tag means.
    pub notes: String,
    /// Popularity score. A negative score marks a rare form, and the
    /// magnitude is used for ranking.
    pub score: i64,
}

impl Record for Tag {
    const BANK: BankKind = BankKind::Tag;
    const ARITY: usize = 5;

    fn from_fields(fields: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            name: bank::required_text(fields, 0, "name")?,
            category: bank::text(fields, 1),
            order: bank::int(fields, 2),
            notes: bank::text(fields, 3),
            score: bank::int(fields, 4),
        })
    }
}

//! Positional record banks.
//!
//! Every bank except the index is a JSON array of fixed-arity arrays, where
//! each field is identified by its position. A record array may be shorter
//! than its declared arity, since older minor versions of the format omit
//! fields that were added later, and the missing fields take their type's
//! default. A record array that is *longer* than the declared arity is
//! rejected outright.

use {
    crate::{DecodeError, json},
    derive_more::Display,
    serde::Serialize,
    serde_json::Value,
    std::time::Instant,
    tracing::debug,
};

/// Kind of file inside a dictionary archive.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BankKind {
    /// `index.json`.
    #[display("index")]
    Index,
    /// `tag_bank_<N>.json`.
    #[display("tag")]
    Tag,
    /// `term_bank_<N>.json`.
    #[display("term")]
    Term,
    /// `kanji_bank_<N>.json`.
    #[display("kanji")]
    Kanji,
    /// `term_meta_bank_<N>.json`.
    #[display("term meta")]
    TermMeta,
    /// `kanji_meta_bank_<N>.json`.
    #[display("kanji meta")]
    KanjiMeta,
}

impl BankKind {
    /// All kinds, in the order they are assembled into a dictionary.
    pub const ALL: [Self; 6] = [
        Self::Index,
        Self::Tag,
        Self::Term,
        Self::Kanji,
        Self::TermMeta,
        Self::KanjiMeta,
    ];

    /// Pattern which file names of this kind match, relative to the archive
    /// root.
    #[must_use]
    pub const fn file_pattern(self) -> &'static str {
        match self {
            Self::Index => r"^index\.json$",
            Self::Tag => r"^tag_bank_[0-9]+\.json$",
            Self::Term => r"^term_bank_[0-9]+\.json$",
            Self::Kanji => r"^kanji_bank_[0-9]+\.json$",
            Self::TermMeta => r"^term_meta_bank_[0-9]+\.json$",
            Self::KanjiMeta => r"^kanji_meta_bank_[0-9]+\.json$",
        }
    }
}

/// Record which is decoded from a fixed-arity JSON array.
pub trait Record: Sized {
    /// Bank this record is stored in.
    const BANK: BankKind;

    /// Number of fields in the record.
    const ARITY: usize;

    /// Decodes the record from its fields.
    ///
    /// `fields` is guaranteed to have at most [`Record::ARITY`] elements.
    ///
    /// # Errors
    ///
    /// Errors if a required field is missing, or any field fails to decode.
    fn from_fields(fields: &[Value]) -> Result<Self, DecodeError>;

    /// Decodes a single record.
    ///
    /// # Errors
    ///
    /// Errors if `node` is not an array, has more than [`Record::ARITY`]
    /// elements, or any field fails to decode.
    fn decode(node: &Value) -> Result<Self, DecodeError> {
        let fields = node
            .as_array()
            .ok_or_else(|| DecodeError::not_array("record", node))?;
        if fields.len() > Self::ARITY {
            return Err(DecodeError::InvalidLength {
                what: record_name(Self::BANK),
                max: Self::ARITY,
                len: fields.len(),
            });
        }
        Self::from_fields(fields)
    }
}

fn record_name(bank: BankKind) -> &'static str {
    match bank {
        BankKind::Index => "index",
        BankKind::Tag => "tag",
        BankKind::Term => "term",
        BankKind::Kanji => "kanji",
        BankKind::TermMeta => "term meta",
        BankKind::KanjiMeta => "kanji meta",
    }
}

/// Decodes every record of a bank, preserving input order.
///
/// # Errors
///
/// Errors if `bank` is not an array, or if any single record fails to
/// decode. The error for the first failing record (by position) is wrapped
/// in [`DecodeError::Record`].
pub fn decode_bank<R: Record + Send>(bank: &Value) -> Result<Vec<R>, DecodeError> {
    let start = Instant::now();
    let nodes = bank
        .as_array()
        .ok_or_else(|| DecodeError::not_array("bank", bank))?;
    let records = decode_records::<R>(nodes)?;
    debug!(
        bank = %R::BANK,
        records = records.len(),
        "Decoded bank in {}ms",
        start.elapsed().as_millis()
    );
    Ok(records)
}

fn decode_indexed<R: Record>(index: usize, node: &Value) -> Result<R, DecodeError> {
    R::decode(node).map_err(|source| DecodeError::Record {
        bank: R::BANK,
        index,
        source: Box::new(source),
    })
}

#[cfg(feature = "rayon")]
fn decode_records<R: Record + Send>(nodes: &[Value]) -> Result<Vec<R>, DecodeError> {
    use rayon::prelude::*;

    // a parallel collect into `Result` may report any failure, so gather
    // everything and pick the lowest index sequentially
    nodes
        .par_iter()
        .enumerate()
        .map(|(index, node)| decode_indexed(index, node))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn decode_records<R: Record + Send>(nodes: &[Value]) -> Result<Vec<R>, DecodeError> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| decode_indexed(index, node))
        .collect()
}

/// Gets a positional field, treating `null` the same as absent.
pub(crate) fn slot(fields: &[Value], index: usize) -> Option<&Value> {
    fields.get(index).filter(|value| !value.is_null())
}

/// Gets a required text field.
pub(crate) fn required_text(
    fields: &[Value],
    index: usize,
    field: &'static str,
) -> Result<String, DecodeError> {
    slot(fields, index)
        .and_then(json::text_of)
        .ok_or(DecodeError::MissingField { field })
}

/// Gets a text field, or an empty string.
pub(crate) fn text(fields: &[Value], index: usize) -> String {
    slot(fields, index)
        .and_then(json::text_of)
        .unwrap_or_default()
}

/// Gets an integer field, or zero.
pub(crate) fn int(fields: &[Value], index: usize) -> i64 {
    slot(fields, index).and_then(json::int_of).unwrap_or_default()
}

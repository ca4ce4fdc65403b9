//! Term and kanji metadata.
//!
//! A metadata record is a `[text, kind, data]` triple, where `kind` decides
//! how `data` is decoded.

use {
    crate::{
        DecodeError,
        bank::{self, BankKind, Record},
        json,
        wire::{Strict, wire_enum},
    },
    serde::Serialize,
    serde_json::Value,
};

wire_enum! {
    /// Discriminant of a [`TermMeta`] record.
    pub enum TermMetaKind as "type" {
        /// [`TermMetaData::Frequency`].
        Frequency = "freq",
        /// [`TermMetaData::Pitches`].
        Pitch = "pitch",
    }
}

impl Strict for TermMetaKind {}

/// Metadata about a term, such as how frequently it appears or how it is
/// pronounced.
///
/// See [`dictionary-term-meta-bank-v3-schema.json`](https://github.com/yomidevs/yomitan/blob/master/ext/data/schemas/dictionary-term-meta-bank-v3-schema.json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMeta {
    /// Term this metadata is for.
    pub text: String,
    /// Metadata payload.
    pub data: TermMetaData,
}

/// Payload of a [`TermMeta`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum TermMetaData {
    /// How often the term appears.
    Frequency(Frequency),
    /// Pitch accent positions of the term for a reading.
    Pitches(Pitches),
}

/// Frequency of a term or kanji.
///
/// Depending on the dictionary's [frequency mode], a higher value means
/// either more or less frequent.
///
/// [frequency mode]: crate::Index::frequency_mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frequency {
    /// Numeric frequency value.
    pub value: i64,
    /// How the value should be displayed to the user, if different from the
    /// number itself.
    pub display: Option<String>,
    /// Reading which this frequency is specific to, if the term has several.
    ///
    /// Always [`None`] for kanji.
    pub reading: Option<String>,
}

/// Pitch accent information for a term, for a single reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pitches {
    /// Reading which these pitch accents apply to.
    pub reading: String,
    /// Possible pitch accents.
    pub entries: Vec<Pitch>,
}

/// Single pitch accent pattern.
///
/// All positions are mora indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pitch {
    /// Position of the downstep. `0` means heiban, with no downstep.
    pub downstep: i64,
    /// Positions of nasalized morae.
    pub nasals: Vec<i64>,
    /// Positions of devoiced morae.
    pub devoicings: Vec<i64>,
    /// Tags for this pattern, by name.
    pub tags: Vec<String>,
}

impl TermMeta {
    /// Gets the kind of this metadata.
    #[must_use]
    pub const fn kind(&self) -> TermMetaKind {
        match self.data {
            TermMetaData::Frequency(_) => TermMetaKind::Frequency,
            TermMetaData::Pitches(_) => TermMetaKind::Pitch,
        }
    }
}

impl Record for TermMeta {
    const BANK: BankKind = BankKind::TermMeta;
    const ARITY: usize = 3;

    fn from_fields(fields: &[Value]) -> Result<Self, DecodeError> {
        let text = bank::required_text(fields, 0, "text")?;
        let kind = TermMetaKind::require(bank::slot(fields, 1))?;
        let data = bank::slot(fields, 2).ok_or(DecodeError::MissingField { field: "data" })?;
        let data = match kind {
            TermMetaKind::Frequency => TermMetaData::Frequency(Frequency::decode_term(data)?),
            TermMetaKind::Pitch => TermMetaData::Pitches(Pitches::decode(data)?),
        };
        Ok(Self { text, data })
    }
}

impl Frequency {
    /// Decodes the frequency payload of a kanji, which is either a bare
    /// number or an object with a `value` and optional `displayValue`.
    ///
    /// # Errors
    ///
    /// Errors if `node` has any other shape, or `value` is missing.
    pub fn decode(node: &Value) -> Result<Self, DecodeError> {
        match node {
            Value::Number(_) => Ok(Self {
                value: json::int_of(node).unwrap_or_default(),
                display: None,
                reading: None,
            }),
            Value::Object(_) => Ok(Self {
                value: json::get_int(node, "value")
                    .ok_or(DecodeError::MissingField { field: "value" })?,
                display: json::get_text(node, "displayValue"),
                reading: None,
            }),
            other => Err(DecodeError::unexpected("frequency", other)),
        }
    }

    /// Decodes the frequency payload of a term.
    ///
    /// On top of the kanji shapes, this accepts a `reading` next to `value`,
    /// and a `{ reading, frequency }` object wrapping either kanji shape.
    ///
    /// # Errors
    ///
    /// Errors if `node` matches none of these shapes.
    pub fn decode_term(node: &Value) -> Result<Self, DecodeError> {
        // which shape is used does not depend on the format version
        let reading = json::get_text(node, "reading");
        let frequency = match json::field(node, "frequency") {
            Some(inner) if json::field(node, "value").is_none() => Self::decode(inner)?,
            _ => Self::decode(node)?,
        };
        Ok(Self {
            reading,
            ..frequency
        })
    }
}

impl Pitches {
    fn decode(node: &Value) -> Result<Self, DecodeError> {
        if !node.is_object() {
            return Err(DecodeError::not_object("pitch data", node));
        }
        let reading =
            json::get_text(node, "reading").ok_or(DecodeError::MissingField { field: "reading" })?;
        let entries = match json::field(node, "pitches") {
            Some(Value::Array(items)) => items.iter().map(Pitch::decode).collect::<Result<_, _>>()?,
            Some(other) => return Err(DecodeError::not_array("pitches", other)),
            None => return Err(DecodeError::MissingField { field: "pitches" }),
        };
        Ok(Self { reading, entries })
    }
}

impl Pitch {
    fn decode(node: &Value) -> Result<Self, DecodeError> {
        if !node.is_object() {
            return Err(DecodeError::not_object("pitch", node));
        }
        Ok(Self {
            downstep: json::get_int(node, "position")
                .ok_or(DecodeError::MissingField { field: "position" })?,
            nasals: json::int_array(json::field(node, "nasal")),
            devoicings: json::int_array(json::field(node, "devoice")),
            tags: json::string_array(json::field(node, "tags")),
        })
    }
}

/// Metadata about a kanji. Currently only frequency information exists.
///
/// See [`dictionary-kanji-meta-bank-v3-schema.json`](https://github.com/yomidevs/yomitan/blob/master/ext/data/schemas/dictionary-kanji-meta-bank-v3-schema.json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanjiMeta {
    /// Kanji this metadata is for.
    pub text: String,
    /// How often the kanji appears.
    pub frequency: Frequency,
}

impl Record for KanjiMeta {
    const BANK: BankKind = BankKind::KanjiMeta;
    const ARITY: usize = 3;

    fn from_fields(fields: &[Value]) -> Result<Self, DecodeError> {
        // slot 1 is always `freq`, and is not checked
        let text = bank::required_text(fields, 0, "text")?;
        let data = bank::slot(fields, 2).ok_or(DecodeError::MissingField { field: "data" })?;
        Ok(Self {
            text,
            frequency: Frequency::decode(data)?,
        })
    }
}

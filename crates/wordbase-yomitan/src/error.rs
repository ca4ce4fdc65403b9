use {
    crate::bank::BankKind,
    derive_more::{Display, Error},
    serde_json::Value,
};

/// Failed to decode a bank, a record, or a value nested inside a record.
///
/// Decoding is fail-fast: the first structural mismatch aborts the whole
/// call, so a partially decoded record never reaches the caller.
#[derive(Debug, Display, Error)]
pub enum DecodeError {
    /// Node must be a JSON array, but was something else.
    #[display("{what} must be an array, got `{node}`")]
    NotArray {
        /// What the node represents, i.e. `bank` or `record`.
        what: &'static str,
        /// Offending node.
        node: Value,
    },
    /// Node must be a JSON object, but was something else.
    #[display("{what} must be an object, got `{node}`")]
    NotObject {
        /// What the node represents.
        what: &'static str,
        /// Offending node.
        node: Value,
    },
    /// Record array has more elements than the record kind has fields.
    #[display("invalid length for {what}: expected at most {max} fields, got {len}")]
    InvalidLength {
        /// Record kind.
        what: &'static str,
        /// Number of fields the record kind declares.
        max: usize,
        /// Length of the input array.
        len: usize,
    },
    /// Required field is absent or null.
    #[display("missing required field `{field}`")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
    },
    /// Value of a strictly resolved field is not one of the known variants.
    #[display("unknown `{field}` value {value:?}")]
    UnknownVariant {
        /// Wire name of the field.
        field: &'static str,
        /// Raw value which failed to resolve.
        value: String,
    },
    /// Node has a JSON kind which is not legal at this position.
    #[display("unexpected {what} node `{node}`")]
    UnexpectedNode {
        /// What the position expects.
        what: &'static str,
        /// Offending node.
        node: Value,
    },
    /// A record inside a bank failed to decode.
    #[display("failed to decode {bank} record #{index}")]
    Record {
        /// Bank the record belongs to.
        bank: BankKind,
        /// Position of the record in its bank.
        index: usize,
        /// Underlying failure.
        source: Box<DecodeError>,
    },
    /// None of the decoded collections determine what kind of dictionary
    /// this is.
    #[display("could not determine dictionary kind: no terms, kanji or metadata")]
    UndeterminedKind,
}

impl DecodeError {
    pub(crate) fn not_array(what: &'static str, node: &Value) -> Self {
        Self::NotArray {
            what,
            node: node.clone(),
        }
    }

    pub(crate) fn not_object(what: &'static str, node: &Value) -> Self {
        Self::NotObject {
            what,
            node: node.clone(),
        }
    }

    pub(crate) fn unexpected(what: &'static str, node: &Value) -> Self {
        Self::UnexpectedNode {
            what,
            node: node.clone(),
        }
    }

    /// Gets the innermost error, skipping over any [`DecodeError::Record`]
    /// context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Record { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

use {
    crate::{
        DecodeError, json,
        wire::{Strict, wire_enum},
    },
    serde::Serialize,
    serde_json::Value,
    tracing::trace,
};

/// Dictionary metadata, stored in `index.json`.
///
/// Unlike the other banks, the index is an object rather than a positional
/// array.
///
/// See [`dictionary-index-schema.json`](https://github.com/yomidevs/yomitan/blob/master/ext/data/schemas/dictionary-index-schema.json).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    /// Title of the dictionary.
    pub title: Option<String>,
    /// Revision of the dictionary, as free text.
    pub revision: Option<String>,
    /// Creator of the dictionary.
    pub author: Option<String>,
    /// Description of the dictionary contents.
    pub description: Option<String>,
    /// Attribution information for the dictionary data.
    pub attribution: Option<String>,
    /// Web page for the dictionary.
    pub url: Option<String>,
    format: Option<i64>,
    version: Option<i64>,
    /// Whether term sequence numbers are meaningful, so that terms with the
    /// same sequence number can be merged.
    pub sequenced: bool,
    /// How frequency values in this dictionary should be interpreted.
    pub frequency_mode: Option<FrequencyMode>,
    /// Whether this dictionary can be updated from [`Index::index_url`].
    pub is_updatable: bool,
    /// URL of the latest `index.json` for this dictionary.
    pub index_url: Option<String>,
    /// URL to download the latest version of this dictionary from.
    pub download_url: Option<String>,
    /// Language of the terms, as an ISO code.
    pub source_language: Option<String>,
    /// Language of the definitions, as an ISO code.
    pub target_language: Option<String>,
}

wire_enum! {
    /// How frequency values in a frequency dictionary are interpreted.
    pub enum FrequencyMode as "frequencyMode" {
        /// Value is how often the term occurs; higher is more common.
        OccurrenceBased = "occurrence-based",
        /// Value is a rank; lower is more common.
        RankBased = "rank-based",
    }
}

impl Strict for FrequencyMode {}

impl Index {
    /// Decodes an index object.
    ///
    /// # Errors
    ///
    /// Errors if `node` is not an object, or if `frequencyMode` is present but
    /// unknown.
    pub fn decode(node: &Value) -> Result<Self, DecodeError> {
        if !node.is_object() {
            return Err(DecodeError::not_object("index", node));
        }
        let index = Self {
            title: json::get_text(node, "title"),
            revision: json::get_text(node, "revision"),
            author: json::get_text(node, "author"),
            description: json::get_text(node, "description"),
            attribution: json::get_text(node, "attribution"),
            url: json::get_text(node, "url"),
            format: json::get_int(node, "format"),
            version: json::get_int(node, "version"),
            sequenced: json::get_bool_or(node, "sequenced", false),
            frequency_mode: FrequencyMode::optional(json::field(node, "frequencyMode"))?,
            is_updatable: json::get_bool_or(node, "isUpdatable", false),
            index_url: json::get_text(node, "indexUrl"),
            download_url: json::get_text(node, "downloadUrl"),
            source_language: json::get_text(node, "sourceLanguage"),
            target_language: json::get_text(node, "targetLanguage"),
        };
        trace!(title = ?index.title, format = ?index.format(), "Decoded index");
        Ok(index)
    }

    /// Format version of the dictionary's banks.
    ///
    /// `format` and `version` are synonyms; if only one is present in the
    /// source, this returns it.
    #[must_use]
    pub fn format(&self) -> Option<i64> {
        self.format.or(self.version)
    }

    /// Synonym of [`Index::format`].
    #[must_use]
    pub fn version(&self) -> Option<i64> {
        self.version.or(self.format)
    }
}

use {
    crate::{
        DecodeError, Index, Kanji, KanjiMeta, Tag, Term, TermMeta,
        bank::{BankKind, decode_bank},
        meta::TermMetaKind,
    },
    serde::Serialize,
    serde_json::Value,
    std::fmt,
    tracing::trace,
};

/// All decoded banks of a single dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    /// Dictionary metadata, if an index has been decoded.
    pub index: Option<Index>,
    /// Tags from every tag bank, in bank order.
    pub tags: Vec<Tag>,
    /// Terms from every term bank, in bank order.
    pub terms: Vec<Term>,
    /// Kanji from every kanji bank, in bank order.
    pub kanji: Vec<Kanji>,
    /// Term metadata from every term meta bank, in bank order.
    pub term_meta: Vec<TermMeta>,
    /// Kanji metadata from every kanji meta bank, in bank order.
    pub kanji_meta: Vec<KanjiMeta>,
}

/// What kind of content a [`Dictionary`] mainly provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryKind {
    /// Has terms.
    Term,
    /// Has kanji, but no terms.
    Kanji,
    /// Only has term frequency metadata.
    Frequency,
    /// Only has term pitch accent metadata.
    PitchAccent,
    /// Only has kanji frequency metadata.
    KanjiFrequency,
}

impl DictionaryKind {
    /// Gets the human-readable name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Term => "Term",
            Self::Kanji => "Kanji",
            Self::Frequency => "Frequency",
            Self::PitchAccent => "Pitch Accent",
            Self::KanjiFrequency => "Kanji Frequency",
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Dictionary {
    /// Decodes a bank of the given kind, and appends its records to this
    /// dictionary.
    ///
    /// Banks of the same kind should be pushed in file name order. Only the
    /// first index is kept.
    ///
    /// # Errors
    ///
    /// Errors if the bank fails to decode, in which case `self` is left
    /// unchanged.
    pub fn push_bank(&mut self, kind: BankKind, bank: &Value) -> Result<(), DecodeError> {
        trace!(%kind, "Pushing bank");
        match kind {
            BankKind::Index => {
                let index = Index::decode(bank)?;
                if self.index.is_none() {
                    self.index = Some(index);
                }
            }
            BankKind::Tag => self.tags.extend(decode_bank::<Tag>(bank)?),
            BankKind::Term => self.terms.extend(decode_bank::<Term>(bank)?),
            BankKind::Kanji => self.kanji.extend(decode_bank::<Kanji>(bank)?),
            BankKind::TermMeta => self.term_meta.extend(decode_bank::<TermMeta>(bank)?),
            BankKind::KanjiMeta => self.kanji_meta.extend(decode_bank::<KanjiMeta>(bank)?),
        }
        Ok(())
    }

    /// Infers the kind of this dictionary from which collections have
    /// records.
    ///
    /// Terms take precedence over kanji, which take precedence over term
    /// metadata, whose kind is taken from its first record. Kanji metadata is
    /// checked last.
    ///
    /// # Errors
    ///
    /// Errors with [`DecodeError::UndeterminedKind`] if every collection is
    /// empty.
    pub fn kind(&self) -> Result<DictionaryKind, DecodeError> {
        if !self.terms.is_empty() {
            Ok(DictionaryKind::Term)
        } else if !self.kanji.is_empty() {
            Ok(DictionaryKind::Kanji)
        } else if let Some(meta) = self.term_meta.first() {
            Ok(match meta.kind() {
                TermMetaKind::Frequency => DictionaryKind::Frequency,
                TermMetaKind::Pitch => DictionaryKind::PitchAccent,
            })
        } else if !self.kanji_meta.is_empty() {
            Ok(DictionaryKind::KanjiFrequency)
        } else {
            Err(DecodeError::UndeterminedKind)
        }
    }

    /// Finds a tag by its name.
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    /// Resolves a list of tag names against this dictionary's tags.
    ///
    /// Names which do not match any tag are skipped.
    pub fn resolve_tags<'a, S: AsRef<str>>(
        &'a self,
        names: &'a [S],
    ) -> impl Iterator<Item = &'a Tag> + 'a {
        names.iter().filter_map(|name| self.tag(name.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn kind_precedence() {
        let mut dict = Dictionary::default();
        assert!(matches!(dict.kind(), Err(DecodeError::UndeterminedKind)));

        dict.push_bank(BankKind::KanjiMeta, &json!([["日", "freq", 1]]))
            .unwrap();
        assert_eq!(dict.kind().unwrap(), DictionaryKind::KanjiFrequency);

        dict.push_bank(
            BankKind::TermMeta,
            &json!([
                ["日", "pitch", { "reading": "ひ", "pitches": [{ "position": 0 }] }],
                ["日", "freq", 2]
            ]),
        )
        .unwrap();
        assert_eq!(dict.kind().unwrap(), DictionaryKind::PitchAccent);

        dict.push_bank(BankKind::Kanji, &json!([["日", "ニチ", "ひ", "", [], {}]]))
            .unwrap();
        assert_eq!(dict.kind().unwrap(), DictionaryKind::Kanji);

        dict.push_bank(BankKind::Term, &json!([["日", "ひ", "", "", 0, ["sun"], 0, ""]]))
            .unwrap();
        assert_eq!(dict.kind().unwrap(), DictionaryKind::Term);
        assert_eq!(dict.kind().unwrap().name(), "Term");
    }

    #[test]
    fn frequency_kind() {
        let mut dict = Dictionary::default();
        dict.push_bank(BankKind::TermMeta, &json!([["の", "freq", 1]]))
            .unwrap();
        assert_eq!(dict.kind().unwrap(), DictionaryKind::Frequency);
    }

    #[test]
    fn names() {
        for kind in [
            DictionaryKind::Term,
            DictionaryKind::Kanji,
            DictionaryKind::Frequency,
            DictionaryKind::PitchAccent,
            DictionaryKind::KanjiFrequency,
        ] {
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(DictionaryKind::PitchAccent.name(), "Pitch Accent");
        assert_eq!(format!("{}", DictionaryKind::KanjiFrequency), "Kanji Frequency");
    }

    #[test]
    fn first_index_wins() {
        let mut dict = Dictionary::default();
        dict.push_bank(BankKind::Index, &json!({ "title": "first", "format": 3 }))
            .unwrap();
        dict.push_bank(BankKind::Index, &json!({ "title": "second" }))
            .unwrap();
        assert_eq!(
            dict.index.as_ref().and_then(|index| index.title.as_deref()),
            Some("first")
        );
    }

    #[test]
    fn failed_bank_leaves_dictionary() {
        let mut dict = Dictionary::default();
        dict.push_bank(BankKind::Tag, &json!([["n", "partOfSpeech", 0, "noun", 0]]))
            .unwrap();
        assert!(
            dict.push_bank(BankKind::Tag, &json!([["v", "", 0, "", 0], 5]))
                .is_err()
        );
        assert_eq!(dict.tags.len(), 1);
    }

    #[test]
    fn tags() {
        let mut dict = Dictionary::default();
        dict.push_bank(
            BankKind::Tag,
            &json!([
                ["n", "partOfSpeech", -3, "noun (common)", 0],
                ["P", "popular", -10, "popular term", 10]
            ]),
        )
        .unwrap();
        dict.push_bank(BankKind::Term, &json!([["猫", "ねこ", "n", "", 0, ["cat"], 0, "P unknown"]]))
            .unwrap();

        assert_eq!(dict.tag("n").map(|tag| tag.notes.as_str()), Some("noun (common)"));
        assert!(dict.tag("x").is_none());

        let term = &dict.terms[0];
        let resolved = dict
            .resolve_tags(&term.term_tags)
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(resolved, ["P"]);
        assert_eq!(dict.resolve_tags(&["n", "P"]).count(), 2);
    }
}

use {
    crate::{
        DecodeError,
        bank::{self, BankKind, Record},
        content::{self, Content},
        json,
    },
    serde::Serialize,
    serde_json::Value,
};

/// Single dictionary entry for a term.
///
/// See [`dictionary-term-bank-v3-schema.json`](https://github.com/yomidevs/yomitan/blob/master/ext/data/schemas/dictionary-term-bank-v3-schema.json).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Text of the term, i.e. the headword.
    pub term: String,
    /// Reading of the term, or an empty string if the reading is the same as
    /// [`Term::term`].
    pub reading: String,
    /// Tags for the definitions, by name.
    pub definition_tags: Vec<String>,
    /// Identifiers of the deinflection rules this term can be reached by.
    ///
    /// Empty if the term does not inflect.
    pub rules: Vec<String>,
    /// Popularity score, used to rank entries for the same term.
    pub score: i64,
    /// Definitions of the term.
    pub definitions: Vec<Content>,
    /// Sequence number. Terms with the same sequence number may be merged
    /// when the dictionary is [sequenced].
    ///
    /// [sequenced]: crate::Index::sequenced
    pub sequence: i64,
    /// Tags for the term itself, by name.
    pub term_tags: Vec<String>,
}

impl Term {
    /// Gets the reading of this term, falling back to the term text if no
    /// distinct reading is given.
    #[must_use]
    pub fn reading_or_term(&self) -> &str {
        if self.reading.is_empty() {
            &self.term
        } else {
            &self.reading
        }
    }
}

impl Record for Term {
    const BANK: BankKind = BankKind::Term;
    const ARITY: usize = 8;

    fn from_fields(fields: &[Value]) -> Result<Self, DecodeError> {
        Ok(Self {
            term: bank::required_text(fields, 0, "term")?,
            reading: bank::text(fields, 1),
            definition_tags: json::space_separated(bank::slot(fields, 2)),
            rules: json::space_separated(bank::slot(fields, 3)),
            score: bank::int(fields, 4),
            definitions: content::decode_all(bank::slot(fields, 5))?,
            sequence: bank::int(fields, 6),
            term_tags: json::space_separated(bank::slot(fields, 7)),
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{decode_bank, structured::Node},
        serde_json::json,
    };

    #[test]
    fn decode() {
        let terms = decode_bank::<Term>(&json!([
            ["打ち込む", "うちこむ", "v5", "v5", 22, ["to drive in (e.g. nail, stake)", "to hit (a ball, etc.)"], 1_585_770, "P ichi news1"],
            ["明白", "めいはく", "adj-na n", "", 900, ["obvious", "clear"], 1_532_090, ""],
        ]))
        .unwrap();
        assert_eq!(terms.len(), 2);

        let term = &terms[0];
        assert_eq!(term.term, "打ち込む");
        assert_eq!(term.reading, "うちこむ");
        assert_eq!(term.definition_tags, ["v5"]);
        assert_eq!(term.rules, ["v5"]);
        assert_eq!(term.score, 22);
        assert_eq!(term.definitions.len(), 2);
        assert_eq!(
            term.definitions[0].text(),
            Some("to drive in (e.g. nail, stake)")
        );
        assert_eq!(term.sequence, 1_585_770);
        assert_eq!(term.term_tags, ["P", "ichi", "news1"]);

        let term = &terms[1];
        assert_eq!(term.definition_tags, ["adj-na", "n"]);
        assert!(term.rules.is_empty());
        assert!(term.term_tags.is_empty());
    }

    #[test]
    fn reading_fallback() {
        let term = Term::decode(&json!(["ひらがな", "", "", "", 0, []])).unwrap();
        assert_eq!(term.reading_or_term(), "ひらがな");
        assert_eq!(term.sequence, 0);
        assert!(term.term_tags.is_empty());

        let term = Term::decode(&json!(["漢字", "かんじ"])).unwrap();
        assert_eq!(term.reading_or_term(), "かんじ");
        assert!(term.definitions.is_empty());
    }

    #[test]
    fn mixed_definitions() {
        let term = Term::decode(&json!([
            "犬",
            "いぬ",
            "n",
            "",
            0,
            [
                "dog",
                { "type": "text", "text": "canine" },
                { "type": "image", "path": "img/dog.png", "width": 64 },
                { "type": "structured-content", "content": [
                    { "tag": "span", "content": "informer" },
                    { "tag": "br" }
                ]}
            ],
            1,
            ""
        ]))
        .unwrap();
        let kinds = term
            .definitions
            .iter()
            .map(Content::kind)
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                content::ContentKind::Text,
                content::ContentKind::Text,
                content::ContentKind::Image,
                content::ContentKind::StructuredContent
            ]
        );
        let Content::StructuredContent(nodes) = &term.definitions[3] else {
            panic!("expected structured content");
        };
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].children(), [Node::Text("informer".into())]);
    }

    #[test]
    fn bad_definition_fails_record() {
        let err = decode_bank::<Term>(&json!([
            ["a", "", "", "", 0, ["ok"], 0, ""],
            ["b", "", "", "", 0, [{ "type": "structured-content", "content": { "tag": "blink" } }], 0, ""],
        ]))
        .unwrap_err();
        assert!(matches!(err, DecodeError::Record { index: 1, .. }));
        assert!(matches!(
            err.root_cause(),
            DecodeError::UnknownVariant { field: "tag", .. }
        ));
    }

    #[test]
    fn missing_term() {
        assert!(matches!(
            Term::decode(&json!([null, "よみ"])),
            Err(DecodeError::MissingField { field: "term" })
        ));
    }
}

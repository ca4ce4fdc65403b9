#![expect(clippy::unwrap_used, reason = "test crate")]

use {
    serde_json::{Value, json},
    std::io::{Cursor, Write},
    wordbase_yomitan::{
        BankKind, DecodeError, DictionaryKind,
        archive::{self, ArchiveError},
    },
    zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions},
};

fn build(entries: &[(&str, Vec<u8>)]) -> Cursor<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, contents) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents).unwrap();
    }
    let mut cursor = writer.finish().unwrap();
    cursor.set_position(0);
    cursor
}

fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

#[test]
fn term_dictionary() {
    let index = bytes(&json!({
        "title": "Test Dictionary",
        "format": 3,
        "revision": "test.1",
        "sequenced": true
    }));
    let tags = bytes(&json!([
        ["n", "partOfSpeech", -3, "noun (common)", 0],
        ["P", "popular", -10, "popular term", 10]
    ]));
    let terms_1 = bytes(&json!([["天", "てん", "n", "", 10, ["sky"], 1, "P"]]));
    let terms_2 = bytes(&json!([[
        "空",
        "そら",
        "n",
        "",
        5,
        [{ "type": "structured-content", "content": [
            { "tag": "span", "content": "sky" },
            { "tag": "img", "path": "img/sky.png" }
        ]}],
        2,
        ""
    ]]));

    let dictionary = archive::read_dictionary(build(&[
        ("term_bank_2.json", terms_2),
        ("img/sky.png", b"\x89PNG".to_vec()),
        ("tag_bank_1.json", tags),
        ("index.json", index),
        ("term_bank_1.json", terms_1),
    ]))
    .unwrap();

    let index = dictionary.index.as_ref().unwrap();
    assert_eq!(index.title.as_deref(), Some("Test Dictionary"));
    assert_eq!(index.format(), Some(3));
    assert!(index.sequenced);

    assert_eq!(dictionary.kind().unwrap(), DictionaryKind::Term);
    assert_eq!(dictionary.tags.len(), 2);
    assert_eq!(
        dictionary
            .terms
            .iter()
            .map(|term| term.term.as_str())
            .collect::<Vec<_>>(),
        ["天", "空"]
    );

    let popular = dictionary
        .resolve_tags(&dictionary.terms[0].term_tags)
        .next()
        .unwrap();
    assert_eq!(popular.category, "popular");
    assert!(dictionary.kanji.is_empty());
    assert!(dictionary.term_meta.is_empty());
}

#[test]
fn frequency_dictionary() {
    let index = bytes(&json!({ "title": "Freq", "version": 3, "frequencyMode": "rank-based" }));
    let meta = bytes(&json!([
        ["の", "freq", { "value": 1, "displayValue": "1㋕" }],
        ["日本", "freq", { "reading": "にほん", "frequency": 120 }]
    ]));
    let dictionary = archive::read_dictionary(build(&[
        ("index.json", index),
        ("term_meta_bank_1.json", meta),
    ]))
    .unwrap();
    assert_eq!(dictionary.kind().unwrap(), DictionaryKind::Frequency);
    assert_eq!(dictionary.index.as_ref().unwrap().format(), Some(3));
    assert_eq!(dictionary.term_meta.len(), 2);
}

#[test]
fn kanji_dictionary() {
    let index = bytes(&json!({ "title": "Kanji", "format": 3 }));
    let kanji = bytes(&json!([["日", "ニチ ジツ", "ひ -び -か", "jouyou", ["day", "sun"], { "strokes": "4" }]]));
    let dictionary = archive::read_dictionary(build(&[
        ("index.json", index),
        ("kanji_bank_1.json", kanji),
    ]))
    .unwrap();
    assert_eq!(dictionary.kind().unwrap(), DictionaryKind::Kanji);
    assert_eq!(dictionary.kanji[0].onyomi, ["ニチ", "ジツ"]);
}

#[test]
fn empty_dictionary_is_undetermined() {
    let index = bytes(&json!({ "title": "Empty" }));
    let dictionary = archive::read_dictionary(build(&[("index.json", index)])).unwrap();
    assert!(matches!(
        dictionary.kind(),
        Err(DecodeError::UndeterminedKind)
    ));
}

#[test]
fn missing_index() {
    let terms = bytes(&json!([["天", "てん", "", "", 0, [], 0, ""]]));
    assert!(matches!(
        archive::read_dictionary(build(&[("term_bank_1.json", terms)])),
        Err(ArchiveError::NoIndex)
    ));
}

#[test]
fn invalid_json() {
    let index = bytes(&json!({ "title": "Broken" }));
    let err = archive::read_dictionary(build(&[
        ("index.json", index),
        ("tag_bank_1.json", b"[[\"n\", ".to_vec()),
    ]))
    .unwrap_err();
    assert!(matches!(
        err,
        ArchiveError::ParseEntry { name, .. } if name == "tag_bank_1.json"
    ));
}

#[test]
fn invalid_record() {
    let index = bytes(&json!({ "title": "Broken" }));
    let terms = bytes(&json!([
        ["a", "", "", "", 0, [], 0, ""],
        ["b", "", "", "", 0, [], 0, "", "extra"]
    ]));
    let err = archive::read_dictionary(build(&[
        ("index.json", index),
        ("term_bank_1.json", terms),
    ]))
    .unwrap_err();
    let ArchiveError::Decode { name, source } = &err else {
        panic!("expected decode error, got {err:?}");
    };
    assert_eq!(name, "term_bank_1.json");
    assert!(matches!(
        source,
        DecodeError::Record {
            bank: BankKind::Term,
            index: 1,
            ..
        }
    ));
    assert!(matches!(
        source.root_cause(),
        DecodeError::InvalidLength { max: 8, len: 9, .. }
    ));
}

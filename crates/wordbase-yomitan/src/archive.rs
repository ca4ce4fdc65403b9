//! Reads a dictionary out of a `.zip` archive.
//!
//! Every file at the archive root is classified by its [`BankKind`] file
//! pattern, and files which match no pattern are ignored. Files of the same
//! kind are decoded in lexicographic order of their names.

use {
    crate::{DecodeError, Dictionary, bank::BankKind},
    derive_more::{Display, Error},
    regex::Regex,
    std::{
        collections::BTreeMap,
        fs::File,
        io::{self, BufReader, Read, Seek},
        path::Path,
        sync::LazyLock,
        time::Instant,
    },
    tracing::{debug, info, trace},
    zip::ZipArchive,
};

pub use {serde_json::Error as JsonError, zip::result::ZipError};

static PATTERNS: LazyLock<Vec<(BankKind, Regex)>> = LazyLock::new(|| {
    BankKind::ALL
        .into_iter()
        .map(|kind| {
            let pattern = Regex::new(kind.file_pattern()).expect("should be valid regex");
            (kind, pattern)
        })
        .collect()
});

/// Failed to read a dictionary from an archive.
#[derive(Debug, Display, Error)]
pub enum ArchiveError {
    /// Failed to open the archive file.
    #[display("failed to open archive file")]
    Io(io::Error),
    /// Source is not a readable zip archive.
    #[display("failed to open archive")]
    Open(ZipError),
    /// Archive has no `index.json`.
    #[display("archive has no `index.json`")]
    NoIndex,
    /// Failed to open an entry in the archive.
    #[display("failed to open {name:?}")]
    OpenEntry {
        /// Entry name.
        name: String,
        /// Underlying error.
        source: ZipError,
    },
    /// Entry is not valid JSON.
    #[display("failed to parse {name:?}")]
    ParseEntry {
        /// Entry name.
        name: String,
        /// Underlying error.
        source: JsonError,
    },
    /// Entry is valid JSON, but not a valid bank.
    #[display("failed to decode {name:?}")]
    Decode {
        /// Entry name.
        name: String,
        /// Underlying error.
        source: DecodeError,
    },
}

/// Gets the kind of bank stored in a file of the given name.
///
/// Returns [`None`] if the file is not a bank, e.g. an image.
#[must_use]
pub fn classify(name: &str) -> Option<BankKind> {
    PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(name))
        .map(|(kind, _)| *kind)
}

/// Groups the bank files in a list of file names by kind.
///
/// Each group is sorted by name.
#[must_use]
pub fn bank_files<'a>(names: impl IntoIterator<Item = &'a str>) -> BTreeMap<BankKind, Vec<String>> {
    let mut banks = BTreeMap::<BankKind, Vec<String>>::new();
    for name in names {
        let Some(kind) = classify(name) else {
            continue;
        };
        trace!(name, %kind, "Classified entry");
        banks.entry(kind).or_default().push(name.to_owned());
    }
    for names in banks.values_mut() {
        names.sort_unstable();
    }
    banks
}

/// Opens and reads a dictionary archive from the file system.
///
/// # Errors
///
/// See [`read_dictionary`].
pub fn open(path: impl AsRef<Path>) -> Result<Dictionary, ArchiveError> {
    let file = File::open(path).map_err(ArchiveError::Io)?;
    read_dictionary(BufReader::new(file))
}

/// Reads every bank of a dictionary archive into a [`Dictionary`].
///
/// # Errors
///
/// Errors if the archive cannot be read, has no index, or if any entry fails
/// to parse or decode.
pub fn read_dictionary<R: Read + Seek>(reader: R) -> Result<Dictionary, ArchiveError> {
    let start = Instant::now();
    let mut archive = ZipArchive::new(reader).map_err(ArchiveError::Open)?;
    info!(entries = archive.len(), "Reading dictionary archive");

    let banks = bank_files(archive.file_names());
    if !banks.contains_key(&BankKind::Index) {
        return Err(ArchiveError::NoIndex);
    }

    let mut dictionary = Dictionary::default();
    // `BankKind` orders the index first
    for (kind, names) in &banks {
        for name in names {
            let bank = parse_entry(&mut archive, name)?;
            dictionary
                .push_bank(*kind, &bank)
                .map_err(|source| ArchiveError::Decode {
                    name: name.clone(),
                    source,
                })?;
        }
    }

    debug!(
        tags = dictionary.tags.len(),
        terms = dictionary.terms.len(),
        kanji = dictionary.kanji.len(),
        term_meta = dictionary.term_meta.len(),
        kanji_meta = dictionary.kanji_meta.len(),
        "Read dictionary in {}ms",
        start.elapsed().as_millis()
    );
    Ok(dictionary)
}

fn parse_entry(
    archive: &mut ZipArchive<impl Read + Seek>,
    name: &str,
) -> Result<serde_json::Value, ArchiveError> {
    let file = archive
        .by_name(name)
        .map_err(|source| ArchiveError::OpenEntry {
            name: name.into(),
            source,
        })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArchiveError::ParseEntry {
        name: name.into(),
        source,
    })
}

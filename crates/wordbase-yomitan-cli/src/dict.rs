use {
    anyhow::{Context, Result},
    ascii_table::AsciiTable,
    serde::Serialize,
    std::{
        io::{self, Write},
        path::Path,
    },
    tracing::info,
    wordbase_yomitan::{BankKind, Dictionary, archive},
};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DumpKind {
    Index,
    Tags,
    Terms,
    Kanji,
    TermMeta,
    KanjiMeta,
}

fn open(path: &Path) -> Result<Dictionary> {
    info!("Reading {path:?}");
    archive::open(path).with_context(|| format!("failed to read dictionary at {path:?}"))
}

pub fn info(path: &Path) -> Result<()> {
    let dict = open(path)?;
    let kind = dict.kind().context("failed to determine dictionary kind")?;
    let index = dict.index.as_ref().context("dictionary has no index")?;

    println!(
        "{:?} revision {:?}",
        index.title.as_deref().unwrap_or_default(),
        index.revision.as_deref().unwrap_or_default()
    );
    println!(
        "  {} dictionary | Format {}",
        kind.name(),
        index
            .format()
            .map_or_else(|| "?".to_owned(), |format| format.to_string())
    );
    if let Some(author) = &index.author {
        println!("  Author: {author}");
    }
    if let Some(url) = &index.url {
        println!("  URL: {url}");
    }
    if let Some(mode) = index.frequency_mode {
        println!("  Frequency mode: {mode}");
    }

    for (header, text) in [
        ("Description", &index.description),
        ("Attribution", &index.attribution),
    ] {
        if let Some(text) = text {
            if !text.trim().is_empty() {
                println!();
                println!("--- {header} ---");
                println!();
                println!("{text}");
            }
        }
    }

    let mut table = AsciiTable::default();
    table.column(0).set_header("Bank");
    table.column(1).set_header("Records");
    let data = [
        (BankKind::Tag, dict.tags.len()),
        (BankKind::Term, dict.terms.len()),
        (BankKind::Kanji, dict.kanji.len()),
        (BankKind::TermMeta, dict.term_meta.len()),
        (BankKind::KanjiMeta, dict.kanji_meta.len()),
    ]
    .into_iter()
    .map(|(kind, count)| vec![kind.to_string(), count.to_string()])
    .collect::<Vec<_>>();
    println!();
    println!("{}", table.format(&data));
    Ok(())
}

pub fn dump(path: &Path, kind: Option<DumpKind>) -> Result<()> {
    let dict = open(path)?;
    match kind {
        None => write_json(&dict),
        Some(DumpKind::Index) => write_json(&dict.index),
        Some(DumpKind::Tags) => write_json(&dict.tags),
        Some(DumpKind::Terms) => write_json(&dict.terms),
        Some(DumpKind::Kanji) => write_json(&dict.kanji),
        Some(DumpKind::TermMeta) => write_json(&dict.term_meta),
        Some(DumpKind::KanjiMeta) => write_json(&dict.kanji_meta),
    }
}

fn write_json(value: &impl Serialize) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to write JSON")?;
    writeln!(stdout)?;
    Ok(())
}

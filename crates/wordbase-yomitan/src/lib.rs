#![doc = include_str!("../README.md")]

#[cfg(feature = "archive")]
pub mod archive;
pub mod bank;
pub mod content;
mod dictionary;
mod error;
mod index;
pub mod json;
mod kanji;
pub mod meta;
pub mod structured;
mod tag;
mod term;
pub mod wire;

pub use {
    bank::{BankKind, Record, decode_bank},
    content::Content,
    dictionary::{Dictionary, DictionaryKind},
    error::DecodeError,
    index::{FrequencyMode, Index},
    kanji::Kanji,
    meta::{Frequency, KanjiMeta, Pitch, Pitches, TermMeta, TermMetaData},
    tag::Tag,
    term::Term,
};

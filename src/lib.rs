//! # lexiko
//!
//! Morphological lexicon extraction for Modern Greek from dependency-annotated
//! treebank corpora (CoNLL-U).
//!
//! ## Pipeline
//!
//! - Normalize raw corpus lines into cleaned token records
//! - Aggregate surface forms into a per-lemma inflection table
//! - Infer a shared stem and an inflectional-class tag per lemma
//! - Emit a sorted tab-separated lexicon
//!
//! A small lexc-splicing utility feeds the resulting entries into a
//! finite-state morphological description.

pub mod cli;
pub mod corpus;
pub mod error;
pub mod inflection;
pub mod lexicon;
pub mod morph;
pub mod pipeline;
pub mod storage;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#![cfg_attr(docsrs, feature(doc_cfg))]

//! # UniMorph vectorizer
//!
//! Converts words into fixed-length feature vectors built from the UniMorph
//! tags they were observed with. Each vector has one slot per part of speech
//! followed by one slot per POS-qualified feature, and averages the one-hot
//! encodings of all tags of the word.
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use unimorph_vectorizer::{read_triples, DictionaryVectorizer, VectorizerConfig};
//!
//! let config = VectorizerConfig::new().use_suffixes(true);
//! let triples = read_triples(BufReader::new(File::open("eng.tsv").unwrap())).unwrap();
//!
//! let mut vectorizer = DictionaryVectorizer::new(config);
//! vectorizer.fit(triples).unwrap();
//! vectorizer.save("eng-vectorizer.json").unwrap();
//!
//! let batch = vectorizer.vectorize(&[vec!["The", "cats", "sleep"]]);
//! println!("{:?}", batch.get(0, 1));
//! ```
//!
//! Argument groups for command-line programs require **crate feature** `cli`.

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;

mod config;
mod corpus;
mod errors;
mod model;
mod trainer;
mod utils;
mod vectorizer;
mod vocab;

pub use config::VectorizerConfig;
pub use corpus::{read_triples, Triple};
pub use errors::{InvalidArgumentError, InvalidModelError, Result, VectorizerError};
pub use model::{IndexTable, Model, WordTagRecord};
pub use trainer::Trainer;
pub use utils::{decode_index_groups, encode_index_groups};
pub use vectorizer::{DictionaryVectorizer, FeatureTensor, LookupSource};
pub use vocab::{tag_to_features, FeatureVocabulary};

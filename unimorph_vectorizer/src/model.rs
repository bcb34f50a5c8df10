use std::collections::BTreeMap;
use std::io::{Read, Write};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::{decode_index_groups, encode_index_groups};
use crate::vocab::FeatureVocabulary;

/// Map from a word (or suffix) to the index vectors of its tags.
pub type IndexTable = HashMap<String, Vec<Vec<usize>>>;

// On-disk layout. BTreeMap keeps the output stable between runs.
#[derive(Serialize, Deserialize)]
struct ModelFile {
    pos: Vec<String>,
    features: Vec<String>,
    word_indexes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix_labels: Option<BTreeMap<String, String>>,
}

fn encode_table(table: &IndexTable) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(key, groups)| (key.clone(), encode_index_groups(groups)))
        .collect()
}

fn decode_table(table: BTreeMap<String, String>, dim: usize) -> Result<IndexTable> {
    let mut decoded = IndexTable::with_capacity(table.len());
    for (key, encoded) in table {
        let groups = decode_index_groups(&encoded, dim)?;
        decoded.insert(key, groups);
    }
    Ok(decoded)
}

/// Model data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    pub(crate) vocab: FeatureVocabulary,
    pub(crate) word_indexes: IndexTable,
    pub(crate) suffix_labels: Option<IndexTable>,
}

impl Model {
    /// Exports the model data as JSON.
    ///
    /// # Arguments
    ///
    /// * `wtr` - Byte-oriented sink object.
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: W) -> Result<()>
    where
        W: Write,
    {
        let file = ModelFile {
            pos: self.vocab.pos().to_vec(),
            features: self.vocab.features().to_vec(),
            word_indexes: encode_table(&self.word_indexes),
            suffix_labels: self.suffix_labels.as_ref().map(encode_table),
        };
        serde_json::to_writer(wtr, &file)?;
        Ok(())
    }

    /// Creates a model from a reader.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A data source.
    ///
    /// # Returns
    ///
    /// A model data read from `rdr`.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error or the data is not a valid model, an
    /// error variant will be returned.
    pub fn read<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let file: ModelFile = serde_json::from_reader(rdr)?;
        let vocab = FeatureVocabulary::new(file.pos, file.features)?;
        let dim = vocab.dim();
        let word_indexes = decode_table(file.word_indexes, dim)?;
        let suffix_labels = file
            .suffix_labels
            .map(|table| decode_table(table, dim))
            .transpose()?;
        Ok(Self {
            vocab,
            word_indexes,
            suffix_labels,
        })
    }

    pub fn vocabulary(&self) -> &FeatureVocabulary {
        &self.vocab
    }

    pub fn word_indexes(&self) -> &IndexTable {
        &self.word_indexes
    }

    pub fn suffix_labels(&self) -> Option<&IndexTable> {
        self.suffix_labels.as_ref()
    }
}

/// Record of a word and one of its tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordTagRecord {
    pub(crate) word: String,
    pub(crate) tag: String,
}

impl WordTagRecord {
    /// Creates a new word tag record.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    /// * `tag` - A UniMorph tag of the word.
    ///
    /// # Returns
    ///
    /// A new record.
    pub const fn new(word: String, tag: String) -> Self {
        Self { word, tag }
    }

    /// Gets a reference to the word.
    pub fn get_word(&self) -> &str {
        &self.word
    }

    /// Gets a reference to the tag.
    pub fn get_tag(&self) -> &str {
        &self.tag
    }
}

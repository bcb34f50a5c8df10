use std::borrow::Borrow;
use std::fmt::Write;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::errors::{Result, VectorizerError};

const GROUP_DELIMITER: char = ';';
const INDEX_DELIMITER: char = ',';

/// Assigns sequential IDs to keys in order of first appearance.
pub struct Indexer<K> {
    ids: HashMap<K, usize>,
    keys: Vec<K>,
}

impl<K> Indexer<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            keys: vec![],
        }
    }

    pub fn get_id<Q: ?Sized>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ToOwned<Owned = K> + Eq + Hash,
    {
        if let Some(&id) = self.ids.get(key) {
            id
        } else {
            let id = self.keys.len();
            let key = key.to_owned();
            self.keys.push(key.clone());
            self.ids.insert(key, id);
            id
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

/// Iterates over the trailing substrings of `word`, shortest first.
///
/// Lengths are counted in characters and bounded by `max_len`.
pub fn suffixes(word: &str, max_len: usize) -> impl Iterator<Item = &str> {
    word.char_indices()
        .rev()
        .take(max_len)
        .map(move |(i, _)| &word[i..])
}

/// Iterates over the trailing substrings of `word`, longest first.
///
/// Yields the same substrings as [`suffixes`] in reverse order.
pub fn suffixes_longest_first(word: &str, max_len: usize) -> impl Iterator<Item = &str> {
    let start = word
        .char_indices()
        .rev()
        .take(max_len)
        .last()
        .map_or(word.len(), |(i, _)| i);
    let tail = &word[start..];
    tail.char_indices().map(move |(i, _)| &tail[i..])
}

/// Flattens index groups into the `0,1,2;0,3` form used in model files.
pub fn encode_index_groups(groups: &[Vec<usize>]) -> String {
    let mut result = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i != 0 {
            result.push(GROUP_DELIMITER);
        }
        for (j, idx) in group.iter().enumerate() {
            if j != 0 {
                result.push(INDEX_DELIMITER);
            }
            // Writing to a String never fails.
            let _ = write!(result, "{idx}");
        }
    }
    result
}

/// Parses the `0,1,2;0,3` form back into index groups.
///
/// Every index must be less than `dim`.
pub fn decode_index_groups(encoded: &str, dim: usize) -> Result<Vec<Vec<usize>>> {
    let mut groups = vec![];
    for group in encoded.split(GROUP_DELIMITER) {
        let mut indexes = vec![];
        for idx in group.split(INDEX_DELIMITER) {
            let idx: usize = idx.trim().parse()?;
            if idx >= dim {
                return Err(VectorizerError::invalid_model(format!(
                    "feature index {idx} is out of range (dim = {dim})"
                )));
            }
            indexes.push(idx);
        }
        groups.push(indexes);
    }
    Ok(groups)
}

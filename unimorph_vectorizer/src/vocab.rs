use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::errors::{Result, VectorizerError};

const TAG_DELIMITER: char = ';';

/// Splits a UniMorph tag into its part of speech and POS-qualified features.
///
/// # Arguments
///
/// * `tag` - A tag such as `V;PRES;PROG`.
///
/// # Returns
///
/// The part of speech followed by the qualified features, e.g.
/// `["V", "V_PRES", "V_PROG"]`.
///
/// # Errors
///
/// If the part of speech field is empty, an error variant will be returned.
///
/// # Examples
///
/// ```
/// use unimorph_vectorizer::tag_to_features;
///
/// let features = tag_to_features("N;PL").unwrap();
/// assert_eq!(vec!["N", "N_PL"], features);
///
/// assert!(tag_to_features(";PL").is_err());
/// ```
pub fn tag_to_features(tag: &str) -> Result<Vec<String>> {
    let mut fields = tag.split(TAG_DELIMITER);
    let pos = fields.next().unwrap_or_default();
    if pos.is_empty() {
        return Err(VectorizerError::invalid_argument(
            "tag",
            format!("`{tag}` has no part of speech"),
        ));
    }
    let mut features = vec![pos.to_string()];
    for field in fields.filter(|field| !field.is_empty()) {
        features.push(format!("{pos}_{field}"));
    }
    Ok(features)
}

/// Index space of POS labels followed by POS-qualified features.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureVocabulary {
    pos: Vec<String>,
    features: Vec<String>,
    codes: HashMap<String, usize>,
}

impl FeatureVocabulary {
    /// Creates a vocabulary from ordered label lists.
    ///
    /// # Errors
    ///
    /// If a label appears twice, an error variant will be returned.
    pub fn new(pos: Vec<String>, features: Vec<String>) -> Result<Self> {
        let mut codes = HashMap::with_capacity(pos.len() + features.len());
        for (i, label) in pos.iter().chain(&features).enumerate() {
            if codes.insert(label.clone(), i).is_some() {
                return Err(VectorizerError::invalid_model(format!(
                    "duplicated feature label `{label}`"
                )));
            }
        }
        Ok(Self {
            pos,
            features,
            codes,
        })
    }

    /// Collects the sorted vocabulary of the given tags.
    pub fn from_tags<'a, I>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut pos_tags = BTreeSet::new();
        let mut pos_features = BTreeSet::new();
        for tag in tags {
            let mut features = tag_to_features(tag)?.into_iter();
            if let Some(pos) = features.next() {
                pos_tags.insert(pos);
            }
            pos_features.extend(features);
        }
        Self::new(
            pos_tags.into_iter().collect(),
            pos_features.into_iter().collect(),
        )
    }

    pub fn pos(&self) -> &[String] {
        &self.pos
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn pos_number(&self) -> usize {
        self.pos.len()
    }

    pub fn dim(&self) -> usize {
        self.pos.len() + self.features.len()
    }

    /// Gets the index of a POS label or a qualified feature.
    pub fn code(&self, label: &str) -> Option<usize> {
        self.codes.get(label).copied()
    }

    /// Converts a tag into feature indexes.
    ///
    /// # Errors
    ///
    /// If the tag is malformed or uses a label unknown to the vocabulary,
    /// an error variant will be returned.
    pub fn tag_to_indexes(&self, tag: &str) -> Result<Vec<usize>> {
        let mut indexes = vec![];
        for feature in tag_to_features(tag)? {
            let idx = self.code(&feature).ok_or_else(|| {
                VectorizerError::invalid_argument(
                    "tag",
                    format!("`{feature}` of `{tag}` is not in the vocabulary"),
                )
            })?;
            // Repeated features keep their first position.
            if !indexes.contains(&idx) {
                indexes.push(idx);
            }
        }
        Ok(indexes)
    }

    /// Restores the tag string from feature indexes.
    ///
    /// # Errors
    ///
    /// The first index must be a POS and the rest must be features of that
    /// POS; otherwise an error variant will be returned.
    pub fn indexes_to_tag(&self, indexes: &[usize]) -> Result<String> {
        let (&first, rest) = indexes
            .split_first()
            .ok_or_else(|| VectorizerError::invalid_argument("indexes", "empty index list"))?;
        let pos = self.pos.get(first).ok_or_else(|| {
            VectorizerError::invalid_argument("indexes", format!("{first} is not a POS index"))
        })?;
        let mut tag = pos.clone();
        for &idx in rest {
            let feature = idx
                .checked_sub(self.pos.len())
                .and_then(|i| self.features.get(i))
                .ok_or_else(|| {
                    VectorizerError::invalid_argument(
                        "indexes",
                        format!("{idx} is not a feature index"),
                    )
                })?;
            let value = feature
                .strip_prefix(pos.as_str())
                .and_then(|s| s.strip_prefix('_'))
                .ok_or_else(|| {
                    VectorizerError::invalid_argument(
                        "indexes",
                        format!("`{feature}` is not a feature of `{pos}`"),
                    )
                })?;
            tag.push(TAG_DELIMITER);
            tag.push_str(value);
        }
        Ok(tag)
    }
}

use crate::config::VectorizerConfig;
use crate::errors::Result;
use crate::model::{IndexTable, Model};
use crate::utils::{suffixes, Indexer};
use crate::vocab::FeatureVocabulary;

// Interval of progress messages in words.
const PROGRESS_INTERVAL: usize = 10000;

#[derive(Default)]
struct SuffixStats {
    // Number of distinct words ending with the suffix.
    n_words: usize,
    // (tag ID, count) in order of first appearance.
    tag_counts: Vec<(usize, usize)>,
}

impl SuffixStats {
    fn add(&mut self, tag_ids: &[usize]) {
        self.n_words += 1;
        for &tag_id in tag_ids {
            if let Some((_, count)) = self.tag_counts.iter_mut().find(|(id, _)| *id == tag_id) {
                *count += 1;
            } else {
                self.tag_counts.push((tag_id, 1));
            }
        }
    }

    // Tags accounting for at least half of the words.
    fn majority_tags(&self) -> impl Iterator<Item = usize> + '_ {
        self.tag_counts
            .iter()
            .filter(move |(_, count)| 2 * count >= self.n_words)
            .map(|&(tag_id, _)| tag_id)
    }
}

/// Trainer of the word and suffix tables.
///
/// # Examples
///
/// ```
/// use unimorph_vectorizer::{Trainer, VectorizerConfig};
///
/// let mut trainer = Trainer::new(VectorizerConfig::default());
/// trainer.add_example("running", "V;PRES;PROG");
/// trainer.add_example("runs", "V;PRES;3;SG");
///
/// let model = trainer.train().unwrap();
/// assert_eq!(5, model.vocabulary().dim());
/// ```
pub struct Trainer {
    config: VectorizerConfig,
    tags: Indexer<String>,
    words: Indexer<String>,
    // Distinct tag IDs of each word, indexed by word ID.
    word_tags: Vec<Vec<usize>>,
}

impl Trainer {
    /// Creates a new trainer.
    ///
    /// Only `use_suffixes`, `min_suffix_count` and `max_suffix_length` of
    /// `config` affect training.
    pub fn new(config: VectorizerConfig) -> Self {
        Self {
            config,
            tags: Indexer::new(),
            words: Indexer::new(),
            word_tags: vec![],
        }
    }

    /// Adds an observation of `word` tagged with `tag`.
    ///
    /// Repeated observations of the same pair are counted once.
    pub fn add_example(&mut self, word: &str, tag: &str) {
        let tag_id = self.tags.get_id(tag);
        let word_id = self.words.get_id(word);
        if word_id == self.word_tags.len() {
            self.word_tags.push(vec![]);
        }
        let word_tags = &mut self.word_tags[word_id];
        if !word_tags.contains(&tag_id) {
            word_tags.push(tag_id);
        }
    }

    /// Gets the number of distinct words.
    pub fn n_words(&self) -> usize {
        self.words.len()
    }

    /// Gets the number of distinct tags.
    pub fn n_tags(&self) -> usize {
        self.tags.len()
    }

    /// Builds the vocabulary and the index tables.
    ///
    /// # Errors
    ///
    /// If any tag lacks a part of speech, an error variant will be returned.
    pub fn train(self) -> Result<Model> {
        let vocab = FeatureVocabulary::from_tags(self.tags.keys().iter().map(String::as_str))?;
        let tag_indexes = self
            .tags
            .keys()
            .iter()
            .map(|tag| vocab.tag_to_indexes(tag))
            .collect::<Result<Vec<_>>>()?;
        log::info!(
            "Vocabulary: {} POS tags, {} features",
            vocab.pos_number(),
            vocab.features().len()
        );

        let n_words = self.words.len();
        let mut word_indexes = IndexTable::with_capacity(n_words);
        let mut suffix_ids = Indexer::<String>::new();
        let mut suffix_stats: Vec<SuffixStats> = vec![];
        for (r, (word, tag_ids)) in self.words.keys().iter().zip(&self.word_tags).enumerate() {
            if (r + 1) % PROGRESS_INTERVAL == 0 {
                log::info!("{} words of {}", r + 1, n_words);
            }
            if self.config.use_suffixes {
                for suffix in suffixes(word, self.config.max_suffix_length) {
                    let suffix_id = suffix_ids.get_id(suffix);
                    if suffix_id == suffix_stats.len() {
                        suffix_stats.push(SuffixStats::default());
                    }
                    suffix_stats[suffix_id].add(tag_ids);
                }
            }
            word_indexes.insert(
                word.clone(),
                tag_ids.iter().map(|&id| tag_indexes[id].clone()).collect(),
            );
        }

        let suffix_labels = if self.config.use_suffixes {
            let mut suffix_labels = IndexTable::new();
            for (suffix, stats) in suffix_ids.keys().iter().zip(&suffix_stats) {
                if stats.n_words < self.config.min_suffix_count {
                    continue;
                }
                let labels: Vec<_> = stats
                    .majority_tags()
                    .map(|id| tag_indexes[id].clone())
                    .collect();
                if !labels.is_empty() {
                    suffix_labels.insert(suffix.clone(), labels);
                }
            }
            log::info!(
                "Suffixes: {} of {} kept",
                suffix_labels.len(),
                suffix_ids.len()
            );
            Some(suffix_labels)
        } else {
            None
        };

        Ok(Model {
            vocab,
            word_indexes,
            suffix_labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_single_example() {
        let mut trainer = Trainer::new(VectorizerConfig::default());
        trainer.add_example("running", "V;PRES;PROG");
        let model = trainer.train().unwrap();

        assert_eq!(&["V".to_string()], model.vocabulary().pos());
        assert_eq!(
            &["V_PRES".to_string(), "V_PROG".to_string()],
            model.vocabulary().features()
        );
        assert_eq!(3, model.vocabulary().dim());
        assert_eq!(
            Some(&vec![vec![0, 1, 2]]),
            model.word_indexes().get("running")
        );
        assert!(model.suffix_labels().is_none());
    }

    #[test]
    fn test_train_groups_distinct_tags() {
        let mut trainer = Trainer::new(VectorizerConfig::default());
        trainer.add_example("walks", "V;PRES;3;SG");
        trainer.add_example("walks", "N;PL");
        trainer.add_example("walks", "V;PRES;3;SG");
        trainer.add_example("walk", "N;SG");

        assert_eq!(2, trainer.n_words());
        assert_eq!(3, trainer.n_tags());

        let model = trainer.train().unwrap();
        // N=0 V=1 N_PL=2 N_SG=3 V_3=4 V_PRES=5 V_SG=6
        assert_eq!(
            Some(&vec![vec![1, 5, 4, 6], vec![0, 2]]),
            model.word_indexes().get("walks")
        );
        assert_eq!(Some(&vec![vec![0, 3]]), model.word_indexes().get("walk"));
    }

    #[test]
    fn test_train_invalid_tag() {
        let mut trainer = Trainer::new(VectorizerConfig::default());
        trainer.add_example("walks", ";PL");

        assert!(trainer.train().is_err());
    }

    #[test]
    fn test_train_suffixes() {
        let config = VectorizerConfig::new()
            .use_suffixes(true)
            .min_suffix_count(2)
            .max_suffix_length(3);
        let mut trainer = Trainer::new(config);
        trainer.add_example("walking", "V;V.PTCP;PRS");
        trainer.add_example("talking", "V;V.PTCP;PRS");
        trainer.add_example("king", "N;SG");
        trainer.add_example("dog", "N;SG");
        let model = trainer.train().unwrap();
        let suffix_labels = model.suffix_labels().unwrap();

        // N=0 V=1 N_SG=2 V_PRS=3 V_V.PTCP=4
        // "ing" ends 3 words, 2 of them participles: only the majority is kept.
        assert_eq!(Some(&vec![vec![1, 4, 3]]), suffix_labels.get("ing"));
        // "g" ends all 4 words and both tags reach half.
        assert_eq!(
            Some(&vec![vec![1, 4, 3], vec![0, 2]]),
            suffix_labels.get("g")
        );
        // "og" ends only one word.
        assert_eq!(None, suffix_labels.get("og"));
        // Longer than `max_suffix_length`.
        assert_eq!(None, suffix_labels.get("king"));
    }

    #[test]
    fn test_train_suffixes_without_majority() {
        let config = VectorizerConfig::new()
            .use_suffixes(true)
            .min_suffix_count(3)
            .max_suffix_length(1);
        let mut trainer = Trainer::new(config);
        trainer.add_example("a", "N;SG");
        trainer.add_example("ba", "V;PST");
        trainer.add_example("ca", "ADJ");
        let model = trainer.train().unwrap();

        assert!(model.suffix_labels().unwrap().is_empty());
    }
}

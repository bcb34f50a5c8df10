use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::VectorizerConfig;
use crate::errors::{Result, VectorizerError};
use crate::model::{IndexTable, Model, WordTagRecord};
use crate::trainer::Trainer;
use crate::utils::suffixes_longest_first;
use crate::vocab::FeatureVocabulary;

const MODEL_EXTENSION: &str = "json";

/// Fallback stage that matched a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// The word itself is in the dictionary.
    Exact,

    /// The lowercased word is in the dictionary.
    Lowercase,

    /// The last space-separated token of the word is in the dictionary.
    LastWord,

    /// A trained suffix of the word matched.
    Suffix,
}

/// Dense 3D array of shape `(batch, max_sentence_length, dim)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTensor {
    data: Vec<f32>,
    batch_size: usize,
    max_length: usize,
    dim: usize,
}

impl FeatureTensor {
    fn zeros(batch_size: usize, max_length: usize, dim: usize) -> Self {
        Self {
            data: vec![0.; batch_size * max_length * dim],
            batch_size,
            max_length,
            dim,
        }
    }

    /// Gets the shape as `(batch, max_sentence_length, dim)`.
    pub const fn shape(&self) -> (usize, usize, usize) {
        (self.batch_size, self.max_length, self.dim)
    }

    /// Gets the feature vector of the `j`-th word in the `i`-th sentence.
    ///
    /// Positions past the end of a sentence hold zero vectors.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of the shape.
    pub fn get(&self, i: usize, j: usize) -> &[f32] {
        assert!(i < self.batch_size && j < self.max_length);
        let start = (i * self.max_length + j) * self.dim;
        &self.data[start..start + self.dim]
    }

    fn get_mut(&mut self, i: usize, j: usize) -> &mut [f32] {
        let start = (i * self.max_length + j) * self.dim;
        &mut self.data[start..start + self.dim]
    }

    /// Gets the flat row-major data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// Converts words to feature vectors with a tag dictionary.
///
/// # Examples
///
/// ```
/// use unimorph_vectorizer::{DictionaryVectorizer, VectorizerConfig};
///
/// let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::default());
/// vectorizer.fit([("run", "running", "V;PRES;PROG")]).unwrap();
///
/// assert_eq!(3, vectorizer.dim());
/// assert_eq!(vec![1., 1., 1.], vectorizer.word_vector("running"));
/// assert_eq!(vec![0., 0., 0.], vectorizer.word_vector("walking"));
///
/// let batch = vectorizer.vectorize(&[vec!["running"], vec!["he", "is", "running"]]);
/// assert_eq!((2, 3, 3), batch.shape());
/// assert_eq!(&[1., 1., 1.], batch.get(1, 2));
/// ```
#[derive(Clone, Debug)]
pub struct DictionaryVectorizer {
    config: VectorizerConfig,
    model: Model,
}

impl DictionaryVectorizer {
    /// Creates an unfitted vectorizer with `dim() == 0`.
    pub fn new(config: VectorizerConfig) -> Self {
        Self {
            config,
            model: Model::default(),
        }
    }

    /// Creates a vectorizer from a trained or loaded model.
    ///
    /// # Errors
    ///
    /// If `config` enables suffixes and `model` has no suffix table, an error
    /// variant will be returned.
    pub fn from_model(config: VectorizerConfig, mut model: Model) -> Result<Self> {
        if config.use_suffixes {
            if model.suffix_labels.is_none() {
                return Err(VectorizerError::invalid_model(
                    "suffixes are enabled but the model has no suffix table",
                ));
            }
        } else {
            model.suffix_labels = None;
        }
        Ok(Self { config, model })
    }

    /// Creates a vectorizer and loads the model at `path` if the file exists.
    ///
    /// The extension of `path` is replaced with `.json`.
    ///
    /// # Errors
    ///
    /// If the model file exists but cannot be loaded, an error variant will
    /// be returned.
    pub fn open<P>(config: VectorizerConfig, path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let mut vectorizer = Self::new(config);
        let path = model_path(path);
        if path.exists() {
            vectorizer.load(path)?;
        }
        Ok(vectorizer)
    }

    /// Trains the dictionary from `(lemma, word, tag)` triples.
    ///
    /// The previous tables are replaced only when training succeeds.
    ///
    /// # Errors
    ///
    /// If a tag has no part of speech, an error variant will be returned.
    pub fn fit<I, L, W, T>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = (L, W, T)>,
        W: AsRef<str>,
        T: AsRef<str>,
    {
        let mut trainer = Trainer::new(self.config);
        for (_lemma, word, tag) in data {
            trainer.add_example(word.as_ref(), tag.as_ref());
        }
        log::info!(
            "Training with {} words and {} tags",
            trainer.n_words(),
            trainer.n_tags()
        );
        self.model = trainer.train()?;
        Ok(())
    }

    /// Loads the model from `path` with its extension replaced by `.json`.
    ///
    /// # Errors
    ///
    /// If the file is missing or malformed, an error variant will be
    /// returned and the current tables are kept.
    pub fn load<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let model = Self::read_model(path)?;
        *self = Self::from_model(self.config, model)?;
        log::debug!(
            "Loaded {} words, dim = {}",
            self.model.word_indexes.len(),
            self.dim()
        );
        Ok(())
    }

    /// Reads the model at `path` with its extension replaced by `.json`.
    ///
    /// # Errors
    ///
    /// If the file is missing or malformed, an error variant will be
    /// returned.
    pub fn read_model<P>(path: P) -> Result<Model>
    where
        P: AsRef<Path>,
    {
        let path = model_path(path);
        log::debug!("Loading {}", path.display());
        Model::read(BufReader::new(File::open(path)?))
    }

    /// Saves the model to `path` with its extension replaced by `.json`.
    ///
    /// # Errors
    ///
    /// When the file cannot be written, an error variant will be returned.
    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = model_path(path);
        log::debug!("Saving {}", path.display());
        let mut wtr = BufWriter::new(File::create(path)?);
        self.model.write(&mut wtr)?;
        wtr.flush()?;
        Ok(())
    }

    pub const fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub const fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    pub fn vocabulary(&self) -> &FeatureVocabulary {
        &self.model.vocab
    }

    pub fn word_indexes(&self) -> &IndexTable {
        &self.model.word_indexes
    }

    pub fn suffix_labels(&self) -> Option<&IndexTable> {
        self.model.suffix_labels.as_ref()
    }

    /// Gets the number of POS labels, which occupy the first indexes.
    pub fn pos_number(&self) -> usize {
        self.model.vocab.pos_number()
    }

    /// Gets the length of feature vectors.
    pub fn dim(&self) -> usize {
        self.model.vocab.dim()
    }

    /// Converts a tag into feature indexes of this vectorizer.
    pub fn tag_to_indexes(&self, tag: &str) -> Result<Vec<usize>> {
        self.model.vocab.tag_to_indexes(tag)
    }

    /// Restores a tag string from feature indexes of this vectorizer.
    pub fn indexes_to_tag(&self, indexes: &[usize]) -> Result<String> {
        self.model.vocab.indexes_to_tag(indexes)
    }

    /// Exports the word dictionary sorted by word.
    ///
    /// # Errors
    ///
    /// If an entry cannot be decoded into a tag, an error variant will be
    /// returned.
    pub fn dictionary(&self) -> Result<Vec<WordTagRecord>> {
        let mut words: Vec<_> = self.model.word_indexes.iter().collect();
        words.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let mut records = vec![];
        for (word, groups) in words {
            for indexes in groups {
                records.push(WordTagRecord::new(
                    word.clone(),
                    self.indexes_to_tag(indexes)?,
                ));
            }
        }
        Ok(records)
    }

    /// Replaces the word dictionary.
    ///
    /// The vocabulary and the suffix table are kept, so every tag must only
    /// use labels already in the vocabulary.
    ///
    /// # Errors
    ///
    /// If a tag cannot be encoded, an error variant will be returned and the
    /// dictionary is left unchanged.
    pub fn replace_dictionary<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = WordTagRecord>,
    {
        let mut word_indexes = IndexTable::new();
        for record in records {
            let indexes = self.tag_to_indexes(&record.tag)?;
            let groups = word_indexes.entry(record.word).or_insert_with(Vec::new);
            if !groups.contains(&indexes) {
                groups.push(indexes);
            }
        }
        self.model.word_indexes = word_indexes;
        Ok(())
    }

    /// Finds the index vectors of `word` with the fallback chain.
    ///
    /// The order is: the word itself, its lowercase form, its last
    /// space-separated token (if `use_last_word`), and its longest trained
    /// suffix (if `use_suffixes`).
    pub fn lookup(&self, word: &str) -> Option<(LookupSource, &[Vec<usize>])> {
        let word_indexes = &self.model.word_indexes;
        if let Some(groups) = word_indexes.get(word) {
            return Some((LookupSource::Exact, groups.as_slice()));
        }
        let lower = word.to_lowercase();
        if lower != word {
            if let Some(groups) = word_indexes.get(&lower) {
                return Some((LookupSource::Lowercase, groups.as_slice()));
            }
        }
        if self.config.use_last_word && word.contains(' ') {
            if let Some(groups) = word
                .split_whitespace()
                .last()
                .and_then(|last| word_indexes.get(last))
            {
                return Some((LookupSource::LastWord, groups.as_slice()));
            }
        }
        if self.config.use_suffixes {
            if let Some(suffix_labels) = &self.model.suffix_labels {
                for suffix in suffixes_longest_first(word, self.config.max_suffix_length) {
                    if let Some(groups) = suffix_labels.get(suffix) {
                        return Some((LookupSource::Suffix, groups.as_slice()));
                    }
                }
            }
        }
        None
    }

    // Averages the one-hot encodings of the matched index vectors into `out`.
    fn fill_word_vector(&self, word: &str, out: &mut [f32]) {
        if let Some((_, groups)) = self.lookup(word) {
            let weight = 1. / groups.len() as f32;
            for indexes in groups {
                for (k, &idx) in indexes.iter().enumerate() {
                    // Each index counts once per group.
                    if !indexes[..k].contains(&idx) {
                        out[idx] += weight;
                    }
                }
            }
        }
    }

    /// Gets the feature vector of a word.
    ///
    /// Words unmatched by every fallback get the zero vector.
    pub fn word_vector(&self, word: &str) -> Vec<f32> {
        let mut vector = vec![0.; self.dim()];
        self.fill_word_vector(word, &mut vector);
        vector
    }

    /// Gets the feature vectors of the words in a sentence.
    pub fn vectorize_sentence<S>(&self, sentence: &[S]) -> Vec<Vec<f32>>
    where
        S: AsRef<str>,
    {
        sentence
            .iter()
            .map(|word| self.word_vector(word.as_ref()))
            .collect()
    }

    /// Vectorizes a batch of tokenized sentences.
    ///
    /// Sentences shorter than the longest one are padded with zero vectors.
    pub fn vectorize<B, S>(&self, batch: &[B]) -> FeatureTensor
    where
        B: AsRef<[S]>,
        S: AsRef<str>,
    {
        let max_length = batch
            .iter()
            .map(|sentence| sentence.as_ref().len())
            .max()
            .unwrap_or(0);
        let mut tensor = FeatureTensor::zeros(batch.len(), max_length, self.dim());
        for (i, sentence) in batch.iter().enumerate() {
            for (j, word) in sentence.as_ref().iter().enumerate() {
                self.fill_word_vector(word.as_ref(), tensor.get_mut(i, j));
            }
        }
        tensor
    }
}

fn model_path<P>(path: P) -> PathBuf
where
    P: AsRef<Path>,
{
    path.as_ref().with_extension(MODEL_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempdir::TempDir;

    const CORPUS: &[(&str, &str, &str)] = &[
        ("run", "running", "V;V.PTCP;PRS"),
        ("walk", "walking", "V;V.PTCP;PRS"),
        ("talk", "talking", "V;V.PTCP;PRS"),
        ("king", "king", "N;SG"),
        ("walk", "walks", "V;PRS;3;SG"),
        ("walk", "walks", "N;PL"),
        ("Paris", "Paris", "PROPN;SG"),
        ("ice cream", "ice cream", "N;SG"),
    ];

    fn suffix_config() -> VectorizerConfig {
        VectorizerConfig::new()
            .use_suffixes(true)
            .min_suffix_count(2)
            .max_suffix_length(3)
    }

    fn fitted(config: VectorizerConfig) -> DictionaryVectorizer {
        let mut vectorizer = DictionaryVectorizer::new(config);
        vectorizer.fit(CORPUS.iter().copied()).unwrap();
        vectorizer
    }

    #[test]
    fn test_fit_single_triple() {
        let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::default());
        vectorizer.fit(vec![("run", "running", "V;PRES;PROG")]).unwrap();

        assert_eq!(&["V".to_string()], vectorizer.vocabulary().pos());
        assert_eq!(
            &["V_PRES".to_string(), "V_PROG".to_string()],
            vectorizer.vocabulary().features()
        );
        assert_eq!(1, vectorizer.pos_number());
        assert_eq!(3, vectorizer.dim());
        assert_eq!(vec![1., 1., 1.], vectorizer.word_vector("running"));
    }

    #[test]
    fn test_fit_invalid_tag_keeps_tables() {
        let mut vectorizer = fitted(VectorizerConfig::default());
        let dim = vectorizer.dim();

        assert!(vectorizer.fit([("a", "a", ";SG")]).is_err());
        assert_eq!(dim, vectorizer.dim());
        assert!(vectorizer.word_indexes().contains_key("walks"));
    }

    #[test]
    fn test_unfitted() {
        let vectorizer = DictionaryVectorizer::new(VectorizerConfig::default());

        assert_eq!(0, vectorizer.dim());
        assert!(vectorizer.word_vector("running").is_empty());
        assert_eq!(None, vectorizer.lookup("running"));
    }

    #[test]
    fn test_word_vector_average() {
        let vectorizer = fitted(VectorizerConfig::default());
        let vector = vectorizer.word_vector("walks");
        let pos_number = vectorizer.pos_number();

        // N;PL and V;PRS;3;SG
        assert_eq!(vec![0.5, 0., 0.5], vector[..pos_number].to_vec());
        let n_pl = vectorizer.vocabulary().code("N_PL").unwrap();
        let v_3 = vectorizer.vocabulary().code("V_3").unwrap();
        assert_eq!(0.5, vector[n_pl]);
        assert_eq!(0.5, vector[v_3]);
        assert_eq!(3., vector.iter().sum::<f32>());
    }

    #[test]
    fn test_word_vector_pos_group_sums_to_one() {
        let vectorizer = fitted(VectorizerConfig::default());
        let pos_number = vectorizer.pos_number();

        for word in vectorizer.word_indexes().keys() {
            let vector = vectorizer.word_vector(word);
            let pos_sum: f32 = vector[..pos_number].iter().sum();
            assert!((pos_sum - 1.).abs() < 1e-6, "{word}: {pos_sum}");
            assert!(vector.iter().all(|&v| (0. ..=1.).contains(&v)), "{word}");
        }
    }

    #[test]
    fn test_word_vector_duplicated_feature() {
        let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::default());
        vectorizer.fit([("x", "x", "V;PST;PST")]).unwrap();

        assert_eq!(Some(&vec![vec![0, 1]]), vectorizer.word_indexes().get("x"));
        assert_eq!(vec![1., 1.], vectorizer.word_vector("x"));
    }

    #[test]
    fn test_word_vector_repeated_index_in_model() {
        let json = r#"{"pos":["V"],"features":["V_PST"],"word_indexes":{"x":"0,1,1;0"}}"#;
        let model = Model::read(json.as_bytes()).unwrap();
        let vectorizer =
            DictionaryVectorizer::from_model(VectorizerConfig::default(), model).unwrap();

        assert_eq!(vec![1., 0.5], vectorizer.word_vector("x"));
    }

    #[test]
    fn test_lookup_unknown_word() {
        let vectorizer = fitted(VectorizerConfig::default());

        assert_eq!(None, vectorizer.lookup("dog"));
        assert!(vectorizer.word_vector("dog").iter().all(|&v| v == 0.));
    }

    #[test]
    fn test_lookup_lowercase() {
        let vectorizer = fitted(VectorizerConfig::default());

        assert_eq!(
            LookupSource::Lowercase,
            vectorizer.lookup("Walks").unwrap().0
        );
        assert_eq!(LookupSource::Exact, vectorizer.lookup("Paris").unwrap().0);
        assert_eq!(None, vectorizer.lookup("paris"));
    }

    #[test]
    fn test_lookup_last_word() {
        let vectorizer = fitted(VectorizerConfig::default());
        assert_eq!(None, vectorizer.lookup("she walks"));
        assert_eq!(LookupSource::Exact, vectorizer.lookup("ice cream").unwrap().0);

        let vectorizer = fitted(VectorizerConfig::new().use_last_word(true));
        let (source, groups) = vectorizer.lookup("she walks").unwrap();
        assert_eq!(LookupSource::LastWord, source);
        assert_eq!(vectorizer.word_indexes()["walks"].as_slice(), groups);
        assert_eq!(None, vectorizer.lookup("walks she"));
    }

    #[test]
    fn test_lookup_suffix() {
        let vectorizer = fitted(suffix_config());
        let (source, groups) = vectorizer.lookup("jumping").unwrap();

        assert_eq!(LookupSource::Suffix, source);
        assert_eq!(vectorizer.suffix_labels().unwrap()["ing"].as_slice(), groups);
        assert_eq!(
            vec![vectorizer.tag_to_indexes("V;V.PTCP;PRS").unwrap()],
            groups
        );
    }

    #[test]
    fn test_lookup_suffix_prefers_longest() {
        let mut vectorizer = DictionaryVectorizer::new(suffix_config());
        vectorizer
            .fit([
                ("", "sing", "V;NFIN"),
                ("", "bring", "V;NFIN"),
                ("", "song", "N;SG"),
                ("", "long", "N;SG"),
            ])
            .unwrap();
        let suffix_labels = vectorizer.suffix_labels().unwrap();
        assert_eq!(2, suffix_labels["ng"].len());
        assert_eq!(1, suffix_labels["ing"].len());

        let (source, groups) = vectorizer.lookup("cling").unwrap();
        assert_eq!(LookupSource::Suffix, source);
        assert_eq!(vec![vectorizer.tag_to_indexes("V;NFIN").unwrap()], groups);

        let (_, groups) = vectorizer.lookup("gang").unwrap();
        assert_eq!(suffix_labels["ng"].as_slice(), groups);
    }

    #[test]
    fn test_lookup_suffix_only_for_unknown_words() {
        let vectorizer = fitted(suffix_config());

        // "king" ends with "ing" but is in the dictionary.
        let (source, groups) = vectorizer.lookup("king").unwrap();
        assert_eq!(LookupSource::Exact, source);
        assert_eq!(vec![vectorizer.tag_to_indexes("N;SG").unwrap()], groups);

        let (source, _) = vectorizer.lookup("King").unwrap();
        assert_eq!(LookupSource::Lowercase, source);
    }

    #[test]
    fn test_suffixes_disabled() {
        let vectorizer = fitted(VectorizerConfig::default());

        assert!(vectorizer.suffix_labels().is_none());
        assert_eq!(None, vectorizer.lookup("jumping"));
    }

    #[test]
    fn test_vectorize_batch_padding() {
        let vectorizer = fitted(VectorizerConfig::default());
        let batch = vectorizer.vectorize(&[vec!["walks"], vec!["king", "walks", "dog"]]);
        let dim = vectorizer.dim();

        assert_eq!((2, 3, dim), batch.shape());
        assert_eq!(2 * 3 * dim, batch.as_slice().len());
        assert_eq!(vectorizer.word_vector("walks").as_slice(), batch.get(0, 0));
        assert!(batch.get(0, 1).iter().all(|&v| v == 0.));
        assert!(batch.get(0, 2).iter().all(|&v| v == 0.));
        assert_eq!(vectorizer.word_vector("king").as_slice(), batch.get(1, 0));
        assert_eq!(vectorizer.word_vector("walks").as_slice(), batch.get(1, 1));
        assert!(batch.get(1, 2).iter().all(|&v| v == 0.));
    }

    #[test]
    fn test_vectorize_empty_batch() {
        let vectorizer = fitted(VectorizerConfig::default());
        let batch: &[Vec<&str>] = &[];

        assert_eq!((0, 0, vectorizer.dim()), vectorizer.vectorize(batch).shape());
    }

    #[test]
    fn test_vectorize_sentence() {
        let vectorizer = fitted(VectorizerConfig::default());
        let rows = vectorizer.vectorize_sentence(&["king".to_string(), "dog".to_string()]);

        assert_eq!(2, rows.len());
        assert_eq!(vectorizer.word_vector("king"), rows[0]);
        assert_eq!(vec![0.; vectorizer.dim()], rows[1]);
    }

    #[test]
    fn test_save_load() {
        let vectorizer = fitted(suffix_config());

        TempDir::new("vectorizer_test")
            .and_then(|dir| {
                let path = dir.path().join("model");
                vectorizer.save(&path).unwrap();
                assert!(dir.path().join("model.json").exists());

                let mut loaded = DictionaryVectorizer::new(suffix_config());
                loaded.load(&path).unwrap();
                assert_eq!(vectorizer.model(), loaded.model());
                assert_eq!(vectorizer.word_vector("jumping"), loaded.word_vector("jumping"));

                let opened =
                    DictionaryVectorizer::open(suffix_config(), dir.path().join("model.bin"))
                        .unwrap();
                assert_eq!(vectorizer.model(), opened.model());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_model_normalizes_extension() {
        let vectorizer = fitted(VectorizerConfig::default());

        TempDir::new("vectorizer_test")
            .and_then(|dir| {
                vectorizer.save(dir.path().join("model")).unwrap();

                let model = DictionaryVectorizer::read_model(dir.path().join("model.bin")).unwrap();
                assert_eq!(vectorizer.model(), &model);
                assert!(DictionaryVectorizer::read_model(dir.path().join("other")).is_err());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_without_suffix_table() {
        let vectorizer = fitted(VectorizerConfig::default());

        TempDir::new("vectorizer_test")
            .and_then(|dir| {
                let path = dir.path().join("model.json");
                vectorizer.save(&path).unwrap();

                let mut loaded = DictionaryVectorizer::new(suffix_config());
                let result = loaded.load(&path);
                assert!(result.is_err());
                assert_eq!(
                    "InvalidModelError: suffixes are enabled but the model has no suffix table",
                    &result.err().unwrap().to_string()
                );
                assert_eq!(0, loaded.dim());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_drops_unused_suffix_table() {
        let vectorizer = fitted(suffix_config());

        TempDir::new("vectorizer_test")
            .and_then(|dir| {
                let path = dir.path().join("model.json");
                vectorizer.save(&path).unwrap();

                let mut loaded = DictionaryVectorizer::new(VectorizerConfig::default());
                loaded.load(&path).unwrap();
                assert!(loaded.suffix_labels().is_none());
                assert_eq!(vectorizer.word_indexes(), loaded.word_indexes());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_or_corrupt() {
        TempDir::new("vectorizer_test")
            .and_then(|dir| {
                let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::default());
                let result = vectorizer.load(dir.path().join("missing.json"));
                assert!(matches!(result, Err(VectorizerError::IOError(_))));

                let path = dir.path().join("corrupt.json");
                std::fs::write(&path, "{\"pos\": [")?;
                let result = vectorizer.load(&path);
                assert!(matches!(result, Err(VectorizerError::JsonError(_))));

                let opened =
                    DictionaryVectorizer::open(VectorizerConfig::default(), dir.path().join("none"))
                        .unwrap();
                assert_eq!(0, opened.dim());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_dictionary_replace() {
        let mut vectorizer = fitted(VectorizerConfig::default());
        let records = vectorizer.dictionary().unwrap();

        assert!(records.contains(&WordTagRecord::new("walks".into(), "N;PL".into())));
        assert!(records.contains(&WordTagRecord::new("walks".into(), "V;PRS;3;SG".into())));
        assert_eq!(8, records.len());

        let original = vectorizer.word_indexes().clone();
        vectorizer.replace_dictionary(records).unwrap();
        assert_eq!(&original, vectorizer.word_indexes());

        vectorizer
            .replace_dictionary(vec![
                WordTagRecord::new("dogs".into(), "N;PL".into()),
                WordTagRecord::new("dogs".into(), "N;PL".into()),
            ])
            .unwrap();
        assert_eq!(1, vectorizer.word_indexes().len());
        assert_eq!(1, vectorizer.word_indexes()["dogs"].len());

        let result =
            vectorizer.replace_dictionary(vec![WordTagRecord::new("ran".into(), "V;PST".into())]);
        assert!(result.is_err());
        assert!(vectorizer.word_indexes().contains_key("dogs"));
    }
}

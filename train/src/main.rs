use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use unimorph_vectorizer::cli::{LogArgs, VectorizerArgs};
use unimorph_vectorizer::{read_triples, DictionaryVectorizer, VectorizerConfig};

#[derive(Parser, Debug)]
#[command(about = "A program to train UniMorph dictionary vectorizers.")]
struct Args {
    /// UniMorph data files with `lemma<TAB>word<TAB>tag` lines
    #[arg(long, required = true)]
    data: Vec<PathBuf>,

    /// The file to write the trained model to (the extension becomes .json)
    #[arg(long)]
    model: PathBuf,

    #[command(flatten)]
    vectorizer: VectorizerArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(3)?;

    log::info!("Loading dataset...");
    let mut triples = vec![];
    for path in &args.data {
        log::info!("Loading {path:?} ...");
        let f = BufReader::new(File::open(path)?);
        let loaded = read_triples(f).map_err(|e| format!("{}: {e}", path.display()))?;
        triples.extend(loaded);
        log::info!("# of triples: {}", triples.len());
    }

    log::info!("Start training...");
    let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::from(&args.vectorizer));
    vectorizer.fit(triples)?;
    log::info!(
        "Finish training: {} words, dim = {}",
        vectorizer.word_indexes().len(),
        vectorizer.dim()
    );
    if let Some(suffix_labels) = vectorizer.suffix_labels() {
        log::info!("# of suffixes: {}", suffix_labels.len());
    }

    vectorizer.save(&args.model)?;
    log::info!("Saved {:?}", args.model.with_extension("json"));

    Ok(())
}

use std::io::{prelude::*, stdin, stdout, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use unimorph_vectorizer::cli::{LogArgs, VectorizerArgs};
use unimorph_vectorizer::{DictionaryVectorizer, VectorizerConfig};

#[derive(Parser, Debug)]
#[command(
    about = "A program to convert tokenized sentences into feature vectors.",
    long_about = "A program to convert tokenized sentences into feature vectors.\n\n\
                  Reads one sentence per line from stdin and writes one JSON array of \
                  word vectors per line to stdout."
)]
struct Args {
    /// The model file to use
    #[arg(long)]
    model: PathBuf,

    /// Tokens are separated by tabs instead of whitespace
    #[arg(long)]
    tsv: bool,

    /// Number of sentences vectorized at once
    #[arg(long, default_value = "32")]
    batch_size: usize,

    #[command(flatten)]
    vectorizer: VectorizerArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn tokenize(line: &str, tsv: bool) -> Vec<String> {
    if tsv {
        line.split('\t')
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    } else {
        line.split_whitespace().map(String::from).collect()
    }
}

fn flush_batch<W>(
    vectorizer: &DictionaryVectorizer,
    batch: &mut Vec<Vec<String>>,
    out: &mut W,
) -> Result<usize, Box<dyn std::error::Error>>
where
    W: Write,
{
    let tensor = vectorizer.vectorize(batch.as_slice());
    let mut n_words = 0;
    for (i, sentence) in batch.iter().enumerate() {
        let rows: Vec<&[f32]> = (0..sentence.len()).map(|j| tensor.get(i, j)).collect();
        serde_json::to_writer(&mut *out, &rows)?;
        writeln!(out)?;
        n_words += sentence.len();
    }
    batch.clear();
    Ok(n_words)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(2)?;
    if args.batch_size == 0 {
        return Err("--batch-size must be positive".into());
    }

    log::info!("Loading model file...");
    let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::from(&args.vectorizer));
    vectorizer.load(&args.model)?;

    log::info!("Start vectorization");
    let mut out = BufWriter::new(stdout().lock());
    let mut batch = vec![];
    let mut n_words = 0;
    let start = Instant::now();
    for line in stdin().lock().lines() {
        batch.push(tokenize(&line?, args.tsv));
        if batch.len() == args.batch_size {
            n_words += flush_batch(&vectorizer, &mut batch, &mut out)?;
        }
    }
    n_words += flush_batch(&vectorizer, &mut batch, &mut out)?;
    out.flush()?;

    let duration = start.elapsed();
    log::info!("Elapsed: {} [sec]", duration.as_secs_f64());
    log::info!(
        "Speed: {} [words/sec]",
        n_words as f64 / duration.as_secs_f64()
    );

    Ok(())
}

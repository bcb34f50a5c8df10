use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use unimorph_vectorizer::cli::LogArgs;
use unimorph_vectorizer::{DictionaryVectorizer, VectorizerConfig, WordTagRecord};

#[derive(Parser, Debug)]
#[command(about = "A program to manipulate trained vectorizer models.")]
struct Args {
    /// Input path of the model file (the extension becomes .json)
    #[arg(long)]
    model_in: PathBuf,

    /// Output path of the model file (the extension becomes .json)
    #[arg(long)]
    model_out: Option<PathBuf>,

    /// Output the word dictionary contained in the model as CSV.
    #[arg(long)]
    dump_dict: Option<PathBuf>,

    /// Replace the word dictionary with a CSV file if the argument is specified.
    #[arg(long)]
    replace_dict: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Deserialize, Serialize)]
struct WordTagRecordFlatten {
    word: String,
    tag: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(3)?;

    log::info!("Loading model file...");
    let model = DictionaryVectorizer::read_model(&args.model_in)?;
    // Keeps the suffix table of the input as is.
    let config = VectorizerConfig::new().use_suffixes(model.suffix_labels().is_some());
    let mut vectorizer = DictionaryVectorizer::from_model(config, model)?;

    if let Some(path) = args.dump_dict {
        log::info!("Saving dictionary file...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        for record in vectorizer.dictionary()? {
            wtr.serialize(WordTagRecordFlatten {
                word: record.get_word().to_string(),
                tag: record.get_tag().to_string(),
            })?;
        }
        wtr.flush()?;
    }

    if let Some(path) = args.replace_dict {
        log::info!("Loading dictionary file...");
        let file = fs::File::open(path)?;
        let mut rdr = csv::Reader::from_reader(file);
        let mut dict = vec![];
        for result in rdr.deserialize() {
            let record: WordTagRecordFlatten = result?;
            dict.push(WordTagRecord::new(record.word, record.tag));
        }
        log::info!("# of records: {}", dict.len());
        vectorizer.replace_dictionary(dict)?;
    }

    if let Some(path) = args.model_out {
        log::info!("Saving model file...");
        vectorizer.save(path)?;
    }

    Ok(())
}

use std::io::stdin;
use std::path::PathBuf;

use clap::Parser;
use unimorph_vectorizer::cli::{LogArgs, VectorizerArgs};
use unimorph_vectorizer::{
    read_triples, DictionaryVectorizer, LookupSource, Triple, VectorizerConfig,
};

#[derive(Parser, Debug)]
#[command(
    about = "A program to evaluate the dictionary coverage of a vectorizer.",
    long_about = "A program to evaluate the dictionary coverage of a vectorizer.\n\n\
                  Reads held-out `lemma<TAB>word<TAB>tag` lines from stdin and reports \
                  which lookup stage matched each word and how often the gold tag is \
                  among the matched tags."
)]
struct Args {
    /// The model file to evaluate
    #[arg(long)]
    model: PathBuf,

    #[command(flatten)]
    vectorizer: VectorizerArgs,

    #[command(flatten)]
    log: LogArgs,
}

const SOURCES: [LookupSource; 4] = [
    LookupSource::Exact,
    LookupSource::Lowercase,
    LookupSource::LastWord,
    LookupSource::Suffix,
];

const fn stage_id(source: LookupSource) -> usize {
    match source {
        LookupSource::Exact => 0,
        LookupSource::Lowercase => 1,
        LookupSource::LastWord => 2,
        LookupSource::Suffix => 3,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct StageCount {
    matched: usize,
    correct: usize,
}

#[derive(Debug, Default, PartialEq)]
struct Report {
    total: usize,
    stages: [StageCount; 4],
    unmatched: usize,
}

impl Report {
    fn add(&mut self, vectorizer: &DictionaryVectorizer, word: &str, tag: &str) {
        self.total += 1;
        let Some((source, groups)) = vectorizer.lookup(word) else {
            self.unmatched += 1;
            return;
        };
        let stage = &mut self.stages[stage_id(source)];
        stage.matched += 1;
        // Gold tags with unseen features are never among the matches.
        if let Ok(gold) = vectorizer.tag_to_indexes(tag) {
            if groups.contains(&gold) {
                stage.correct += 1;
            }
        }
    }

    fn correct(&self) -> usize {
        self.stages.iter().map(|s| s.correct).sum()
    }
}

fn evaluate(vectorizer: &DictionaryVectorizer, triples: &[Triple]) -> Report {
    let mut report = Report::default();
    for (_, word, tag) in triples {
        report.add(vectorizer, word, tag);
    }
    report
}

fn ratio(n: usize, total: usize) -> f64 {
    if total == 0 {
        0.
    } else {
        n as f64 / total as f64
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(2)?;

    log::info!("Loading model file...");
    let mut vectorizer = DictionaryVectorizer::new(VectorizerConfig::from(&args.vectorizer));
    vectorizer.load(&args.model)?;

    log::info!("Loading test data...");
    let triples = read_triples(stdin().lock())?;

    let report = evaluate(&vectorizer, &triples);
    for (source, stage) in SOURCES.iter().zip(&report.stages) {
        println!(
            "{:?}: matched={} ({:.4}), gold tag found={} ({:.4})",
            source,
            stage.matched,
            ratio(stage.matched, report.total),
            stage.correct,
            ratio(stage.correct, stage.matched),
        );
    }
    println!(
        "Unmatched: {} ({:.4})",
        report.unmatched,
        ratio(report.unmatched, report.total)
    );
    println!(
        "Tag recall: {}/{} = {:.4}",
        report.correct(),
        report.total,
        ratio(report.correct(), report.total)
    );

    Ok(())
}

use std::io::BufRead;

use crate::errors::{Result, VectorizerError};

/// A `(lemma, word, tag)` triple.
pub type Triple = (String, String, String);

/// Reads UniMorph data with one `lemma<TAB>word<TAB>tag` triple per line.
///
/// Blank lines are skipped and fields after the third are ignored.
///
/// # Errors
///
/// If a line has fewer than three fields, an error variant carrying the line
/// number will be returned. Errors of `rdr` are returned as is.
///
/// # Examples
///
/// ```
/// use unimorph_vectorizer::read_triples;
///
/// let data = "run\trunning\tV;V.PTCP;PRS\n\nrun\tran\tV;PST\n";
/// let triples = read_triples(data.as_bytes()).unwrap();
///
/// assert_eq!(2, triples.len());
/// assert_eq!("ran", triples[1].1);
/// ```
pub fn read_triples<R>(rdr: R) -> Result<Vec<Triple>>
where
    R: BufRead,
{
    let mut triples = vec![];
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        if i % 100000 == 0 && i != 0 {
            log::debug!("# of lines: {i}");
        }
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(lemma), Some(word), Some(tag)) => {
                triples.push((lemma.to_string(), word.to_string(), tag.to_string()));
            }
            _ => {
                return Err(VectorizerError::invalid_argument(
                    "data",
                    format!("line {}: expected `lemma<TAB>word<TAB>tag`", i + 1),
                ));
            }
        }
    }
    Ok(triples)
}

use super::signature::{canonical, normalize, Signature};
use crate::errors::Result;

/// Lazy sequence of the words whose signature matches a query.
///
/// Items are yielded in source order. Blank entries never match.
#[derive(Debug, Clone)]
pub struct Matches<I> {
    signature: Signature,
    words: I,
}

impl<I> Matches<I> {
    /// The query signature being matched against.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl<I> Iterator for Matches<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let signature = &self.signature;
        self.words.find(|word| {
            let word: &str = word.as_ref();
            !word.trim().is_empty() && canonical(word) == *signature
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.words.size_hint().1)
    }
}

/// Find every word in `words` that is an anagram of `query`.
///
/// The query is normalized once; each word is normalized as the sequence is
/// consumed. An empty source or a query without matches yields nothing.
///
/// # Errors
///
/// Returns [`crate::errors::Error::InvalidInput`] if `query` is blank.
///
/// # Example
///
/// ```
/// use jumbler::anagram::find;
///
/// let words = ["gamma", "magam", "other"];
/// let found: Vec<_> = find("gamma", words).unwrap().collect();
/// assert_eq!(found, vec!["gamma", "magam"]);
/// ```
pub fn find<I>(query: &str, words: I) -> Result<Matches<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let signature = normalize(query)?;
    log::debug!("Query {:?} has signature {}", query, signature);
    Ok(Matches {
        signature,
        words: words.into_iter(),
    })
}

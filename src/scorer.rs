//! TF-IDF scoring of a single token against the corpus index.
//!
//! Score maps are ordered like the index (document load order) and only hold
//! documents in which the token occurs.

use crate::index::CorpusIndex;

/// Per-document scores for one token, in index order.
pub type ScoreMap<'a> = Vec<(&'a str, f64)>;

/// Occurrences of `token` in each document over that document's token total.
/// Documents without the token are omitted, so the denominator is never zero.
pub fn term_frequency<'a>(token: &str, index: &'a CorpusIndex) -> ScoreMap<'a> {
    index
        .documents()
        .iter()
        .filter_map(|doc| {
            let count = doc.get(token)?;
            Some((doc.name.as_str(), count as f64 / doc.total() as f64))
        })
        .collect()
}

/// `log10(N / (df + 1))` where `N` is the number of documents and `df` the
/// number containing `token`. Negative once `df + 1 > N`.
pub fn inverse_document_frequency(token: &str, index: &CorpusIndex) -> f64 {
    let documents = index.document_count() as f64;
    let containing = index.document_frequency(token) as f64;
    (documents / (containing + 1.0)).log10()
}

pub fn tfidf<'a>(token: &str, index: &'a CorpusIndex) -> ScoreMap<'a> {
    let tf = term_frequency(token, index);
    if tf.is_empty() {
        return tf;
    }
    let idf = inverse_document_frequency(token, index);
    tf.into_iter().map(|(name, tf)| (name, tf * idf)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;
    use crate::stop_words::StopWords;
    use crate::tokenizer::Tokenizer;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn build(docs: &[(&str, &str)]) -> CorpusIndex {
        let documents: Vec<Document> = docs
            .iter()
            .map(|(name, text)| Document::new(*name, *text))
            .collect();
        let stopwords: StopWords = ["the"].into_iter().collect();
        CorpusIndex::build(&documents, &Tokenizer::new(), &stopwords)
    }

    #[test]
    fn term_frequency_divides_by_document_total() {
        let index = build(&[("a", "rust rust go"), ("b", "go"), ("c", "java")]);
        let tf = term_frequency("rust", &index);
        assert_eq!(tf.len(), 1);
        assert_eq!(tf[0].0, "a");
        assert!((tf[0].1 - 2.0 / 3.0).abs() < EPSILON);

        let tf = term_frequency("go", &index);
        let names: Vec<&str> = tf.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!((tf[1].1 - 1.0).abs() < EPSILON);
    }

    #[test]
    fn idf_smooths_only_the_denominator() {
        let index = build(&[("doc1", "the cat sat"), ("doc2", "the dog sat")]);
        let idf = inverse_document_frequency("sat", &index);
        assert!((idf - (2.0f64 / 3.0).log10()).abs() < EPSILON);
        assert!(idf < 0.0);

        let idf = inverse_document_frequency("cat", &index);
        assert!(idf.abs() < EPSILON, "log10(2 / 2) should be zero, got {idf}");
    }

    #[test]
    fn idf_is_positive_for_rare_tokens() {
        let docs: Vec<(String, String)> = (0..20)
            .map(|i| (format!("d{i}"), if i == 0 { "rare".into() } else { "common".into() }))
            .collect();
        let docs: Vec<(&str, &str)> = docs.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
        let index = build(&docs);
        let idf = inverse_document_frequency("rare", &index);
        assert!((idf - 1.0).abs() < EPSILON, "log10(20 / 2) should be 1, got {idf}");
    }

    #[test]
    fn tfidf_multiplies_tf_by_idf() {
        let index = build(&[("doc1", "the cat sat"), ("doc2", "the dog sat")]);
        let scores = tfidf("sat", &index);
        let expected = 0.5 * (2.0f64 / 3.0).log10();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].0, "doc1");
        assert_eq!(scores[1].0, "doc2");
        for (_, score) in &scores {
            assert!((score - expected).abs() < EPSILON);
            assert!((score - -0.088).abs() < 1e-3);
        }
    }

    #[test]
    fn unknown_token_scores_nothing() {
        let index = build(&[("doc1", "the cat sat")]);
        assert!(term_frequency("zzz", &index).is_empty());
        assert!(tfidf("zzz", &index).is_empty());
    }

    proptest! {
        #[test]
        fn tf_is_within_unit_interval(texts in proptest::collection::vec("[xyz ]{1,30}", 1..8)) {
            let docs: Vec<(String, String)> = texts
                .iter()
                .enumerate()
                .map(|(i, t)| (format!("d{i}"), t.clone()))
                .collect();
            let docs: Vec<(&str, &str)> = docs.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
            let index = build(&docs);
            for token in ["x", "y", "z"] {
                for (_, tf) in term_frequency(token, &index) {
                    prop_assert!(tf > 0.0 && tf <= 1.0);
                }
            }
        }

        #[test]
        fn rarer_tokens_have_no_lower_idf(texts in proptest::collection::vec("[xyz ]{0,30}", 1..8)) {
            let docs: Vec<(String, String)> = texts
                .iter()
                .enumerate()
                .map(|(i, t)| (format!("d{i}"), t.clone()))
                .collect();
            let docs: Vec<(&str, &str)> = docs.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
            let index = build(&docs);
            for a in ["x", "y", "z"] {
                for b in ["x", "y", "z"] {
                    if index.document_frequency(a) < index.document_frequency(b) {
                        prop_assert!(
                            inverse_document_frequency(a, &index)
                                >= inverse_document_frequency(b, &index)
                        );
                    }
                }
            }
        }
    }
}

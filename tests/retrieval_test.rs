//! Integration tests for BM25 FAQ retrieval.

use std::io::Write;
use std::sync::Arc;

use faqrank::config::RetrieverConfig;
use faqrank::corpus::{CorpusProvider, FaqDocument, JsonlCorpus, StaticCorpus};
use faqrank::error::Result;
use faqrank::retrieval::retriever::Bm25Retriever;

fn support_corpus() -> Vec<FaqDocument> {
    vec![
        FaqDocument::new("1", "reset password", "use forgot password link"),
        FaqDocument::new("2", "billing cycle", "monthly invoice"),
        FaqDocument::new("3", "cancel subscription", "go to account settings"),
        FaqDocument::new("4", "change email address", "open profile settings"),
    ]
}

fn retriever(documents: Vec<FaqDocument>) -> Bm25Retriever {
    Bm25Retriever::with_defaults(Arc::new(StaticCorpus::new(documents))).unwrap()
}

#[test]
fn test_rank_is_deterministic() -> Result<()> {
    let retriever = retriever(support_corpus());

    let first = retriever.rank("how do I reset my password", Some(4))?;
    for _ in 0..5 {
        let again = retriever.rank("how do I reset my password", Some(4))?;
        assert_eq!(again, first);
    }
    Ok(())
}

#[test]
fn test_results_sorted_descending_with_stable_ties() -> Result<()> {
    let retriever = retriever(support_corpus());
    let results = retriever.rank("settings", Some(4))?;

    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // "settings" matches documents 3 and 4; the non-matching documents 1 and
    // 2 tie at 0.0 and must keep corpus insertion order.
    let zero_scored: Vec<&str> = results
        .iter()
        .filter(|r| r.score == 0.0)
        .map(|r| r.document.id.as_str())
        .collect();
    assert_eq!(zero_scored, vec!["1", "2"]);
    Ok(())
}

#[test]
fn test_cardinality() -> Result<()> {
    let retriever = retriever(support_corpus());

    assert_eq!(retriever.rank("password", Some(2))?.len(), 2);
    assert_eq!(retriever.rank("password", Some(100))?.len(), 4);
    assert_eq!(retriever.rank("password", Some(0))?.len(), 0);

    let empty = Bm25Retriever::with_defaults(Arc::new(StaticCorpus::new(vec![]))).unwrap();
    assert_eq!(empty.rank("password", Some(100))?.len(), 0);
    Ok(())
}

#[test]
fn test_zero_match_query() -> Result<()> {
    let retriever = retriever(support_corpus());
    let results = retriever.rank("zebra quantum flux", Some(4))?;

    assert_eq!(results.len(), 4);
    for (result, expected) in results.iter().zip(["1", "2", "3", "4"]) {
        assert_eq!(result.document.id, expected);
        assert_eq!(result.score, 0.0);
    }
    Ok(())
}

#[test]
fn test_empty_query_behaves_as_zero_match() -> Result<()> {
    let retriever = retriever(support_corpus());

    let empty = retriever.rank("", Some(4))?;
    let whitespace = retriever.rank("   \t ?!", Some(4))?;
    let zero_match = retriever.rank("zebra quantum flux", Some(4))?;

    assert_eq!(empty, zero_match);
    assert_eq!(whitespace, zero_match);
    Ok(())
}

#[test]
fn test_monotonic_relevance() -> Result<()> {
    let retriever = retriever(vec![
        FaqDocument::new("1", "reset password", "use forgot password link"),
        FaqDocument::new("2", "billing cycle", "monthly invoice"),
    ]);

    let results = retriever.rank("password reset", Some(2))?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.id, "1");
    assert!(results[0].score > 0.0);
    assert!(results[0].score > results[1].score);
    Ok(())
}

#[test]
fn test_case_and_punctuation_insensitivity() -> Result<()> {
    let retriever = retriever(support_corpus());

    let shouty = retriever.rank("Password?!", Some(4))?;
    let plain = retriever.rank("password", Some(4))?;
    assert_eq!(shouty, plain);
    Ok(())
}

#[test]
fn test_rebuild_isolation() -> Result<()> {
    let retriever = retriever(support_corpus());

    let results = retriever.rank("password", Some(1))?;
    assert_eq!(results[0].document.id, "1");

    // Replace the corpus with documents that never mention passwords.
    retriever.build_from(vec![
        FaqDocument::new("10", "shipping time", "three to five days"),
        FaqDocument::new("11", "return policy", "thirty days"),
    ])?;

    let results = retriever.rank("password", Some(5))?;
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.score == 0.0));
    assert!(results.iter().all(|r| r.document.id != "1"));
    Ok(())
}

#[test]
fn test_custom_parameters_change_scores() -> Result<()> {
    let provider: Arc<dyn CorpusProvider> = Arc::new(StaticCorpus::new(support_corpus()));

    let default = Bm25Retriever::with_defaults(Arc::clone(&provider)).unwrap();
    let tuned = Bm25Retriever::new(
        provider,
        RetrieverConfig {
            k1: 0.1,
            b: 0.0,
            default_top_k: 5,
        },
    )
    .unwrap();

    let a = default.rank("forgot password link", Some(1))?;
    let b = tuned.rank("forgot password link", Some(1))?;

    assert_eq!(a[0].document.id, b[0].document.id);
    assert_ne!(a[0].score, b[0].score);
    Ok(())
}

#[test]
fn test_jsonl_corpus_end_to_end() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "{}",
        r#"{"id": "1", "question": "reset password", "answer": "use forgot password link"}"#
    )
    .unwrap();
    writeln!(
        file,
        "{}",
        r#"{"id": "2", "question": "billing cycle", "answer": "monthly invoice"}"#
    )
    .unwrap();
    file.flush().unwrap();

    let retriever =
        Bm25Retriever::with_defaults(Arc::new(JsonlCorpus::new(file.path()))).unwrap();
    let results = retriever.rank("password reset", Some(2))?;

    assert_eq!(results[0].document.id, "1");
    assert!(results[0].score > 0.0);
    Ok(())
}

#[test]
fn test_concurrent_rank_and_rebuild() {
    let retriever = Arc::new(retriever(support_corpus()));
    retriever.build().unwrap();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let retriever = Arc::clone(&retriever);
        handles.push(std::thread::spawn(move || {
            for _ in 0..100 {
                let results = retriever.rank("password reset", Some(4)).unwrap();
                // Readers must always see a complete index: either the full
                // old corpus or the full new one.
                assert!(results.len() == 4 || results.len() == 2);
            }
        }));
    }

    let writer = Arc::clone(&retriever);
    handles.push(std::thread::spawn(move || {
        for i in 0..50 {
            if i % 2 == 0 {
                writer
                    .build_from(vec![
                        FaqDocument::new("10", "shipping time", "three days"),
                        FaqDocument::new("11", "return policy", "thirty days"),
                    ])
                    .unwrap();
            } else {
                writer.build().unwrap();
            }
        }
    }));

    for handle in handles {
        handle.join().unwrap();
    }
}

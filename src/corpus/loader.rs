//! JSONL corpus loader.
//!
//! Reads FAQ documents from a file containing one JSON object per line:
//!
//! ```text
//! {"id": "1", "question": "reset password", "answer": "use forgot password link"}
//! {"id": "2", "question": "billing cycle", "answer": "monthly invoice"}
//! ```
//!
//! Blank lines are skipped. A line that is not valid JSON or is missing one of
//! the `id`, `question`, or `answer` fields fails the whole load: a malformed
//! corpus is a configuration problem and surfaces at build time rather than
//! corrupting scores later.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::corpus::{CorpusProvider, FaqDocument};
use crate::error::{FaqRankError, Result};

/// A corpus provider that reads FAQ documents from a JSONL file.
///
/// Each `load` call re-reads the file, so the provider can be used to refresh
/// the index after the file changes.
///
/// # Examples
///
/// ```no_run
/// use faqrank::corpus::{CorpusProvider, JsonlCorpus};
///
/// let corpus = JsonlCorpus::new("faqs.jsonl");
/// let documents = corpus.load().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct JsonlCorpus {
    path: PathBuf,
}

impl JsonlCorpus {
    /// Create a new JSONL corpus provider for the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonlCorpus {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path this provider reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusProvider for JsonlCorpus {
    fn load(&self) -> Result<Vec<FaqDocument>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut documents = Vec::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let document: FaqDocument = serde_json::from_str(&line).map_err(|e| {
                FaqRankError::corpus(format!(
                    "malformed FAQ entry at {}:{}: {e}",
                    self.path.display(),
                    line_number + 1
                ))
            })?;
            documents.push(document);
        }

        Ok(documents)
    }
}

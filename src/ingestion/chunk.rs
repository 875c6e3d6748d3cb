//! Bounded, overlapping character chunking.
//!
//! Splits extracted text into ordered segments of at most `chunk_size`
//! characters, preferring separator boundaries and carrying up to
//! `chunk_overlap` characters between consecutive segments. Spans with no
//! separator inside them are sliced into fixed overlapping windows instead.
//! Output is deterministic for identical input and configuration.

use serde::{Deserialize, Serialize};

use crate::types::RagError;

/// Chunker configuration. Lengths are in Unicode scalar values.
///
/// Invariants enforced by [`Chunker::new`]: `chunk_size > 0` and
/// `chunk_overlap < chunk_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    pub separator: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

/// One bounded span of plain text, with its position in the source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub index: usize,
    pub content: String,
}

/// Splits text into [`TextSegment`]s under a validated [`ChunkerConfig`].
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Result<Self, RagError> {
        if config.chunk_size == 0 {
            return Err(RagError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if config.chunk_overlap >= config.chunk_size {
            return Err(RagError::InvalidConfig(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                config.chunk_overlap, config.chunk_size
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Splits `text` into ordered segments.
    ///
    /// Input no longer than `chunk_size` yields a single segment; empty or
    /// whitespace-only input yields none.
    pub fn split(&self, text: &str) -> Vec<TextSegment> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chunks = if char_len(text) <= self.config.chunk_size {
            vec![text.to_string()]
        } else if self.config.separator.is_empty() || !text.contains(&self.config.separator) {
            self.hard_slice(text)
        } else {
            self.merge_pieces(text)
        };

        chunks
            .into_iter()
            .filter(|chunk| !chunk.is_empty())
            .enumerate()
            .map(|(index, content)| TextSegment { index, content })
            .collect()
    }

    /// Fixed overlapping windows for spans with no separator to split at.
    ///
    /// Windows are `chunk_size` characters wide and advance by
    /// `chunk_size - chunk_overlap`, so consecutive windows share exactly
    /// `chunk_overlap` characters and the final window reaches the end of
    /// the span.
    fn hard_slice(&self, span: &str) -> Vec<String> {
        let chars: Vec<char> = span.chars().collect();
        let step = self.config.chunk_size - self.config.chunk_overlap;

        let mut windows = Vec::new();
        let mut start = 0;
        loop {
            let end = (start + self.config.chunk_size).min(chars.len());
            windows.push(chars[start..end].iter().collect());
            if end == chars.len() {
                break;
            }
            start += step;
        }
        windows
    }

    /// Greedy separator-boundary merge with overlap carry.
    ///
    /// Pieces are joined with the separator until the next piece would push
    /// the segment past `chunk_size`; the segment is then emitted and a tail
    /// of whole pieces totalling at most `chunk_overlap` characters seeds the
    /// next one. Pieces longer than `chunk_size` interrupt the merge and are
    /// hard-sliced as standalone windows (their overlap comes from the
    /// slicing itself, so no carry crosses that boundary).
    fn merge_pieces(&self, text: &str) -> Vec<String> {
        let separator = self.config.separator.as_str();
        let sep_len = char_len(separator);

        let mut chunks: Vec<String> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        // Length in chars of `buffer` joined with the separator.
        let mut buffer_len = 0usize;
        // Whether `buffer` holds a piece that has not been emitted yet.
        let mut fresh = false;

        for piece in text.split(separator) {
            let piece_len = char_len(piece);

            if piece_len > self.config.chunk_size {
                if fresh && !buffer.is_empty() {
                    chunks.push(buffer.join(separator));
                }
                buffer.clear();
                buffer_len = 0;
                fresh = false;
                chunks.extend(self.hard_slice(piece));
                continue;
            }

            let addition = if buffer.is_empty() {
                piece_len
            } else {
                sep_len + piece_len
            };

            if !buffer.is_empty() && buffer_len + addition > self.config.chunk_size {
                if fresh {
                    chunks.push(buffer.join(separator));
                }
                while !buffer.is_empty()
                    && (buffer_len > self.config.chunk_overlap
                        || buffer_len + sep_len + piece_len > self.config.chunk_size)
                {
                    let removed = char_len(buffer.remove(0));
                    buffer_len -= removed;
                    if !buffer.is_empty() {
                        buffer_len -= sep_len;
                    }
                }
                fresh = false;
            }

            buffer_len += if buffer.is_empty() {
                piece_len
            } else {
                sep_len + piece_len
            };
            buffer.push(piece);
            fresh = true;
        }

        if fresh && !buffer.is_empty() {
            chunks.push(buffer.join(separator));
        }
        chunks
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

//! Product block segmentation over recognized text.

use tracing::debug;

use crate::extract::patterns::Patterns;
use crate::models::records::RawBlock;

/// Splits raw recognized text into line-grouped product blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockSegmenter {
    patterns: Patterns,
}

impl BlockSegmenter {
    /// Create a segmenter over the given patterns.
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Split text into product blocks.
    ///
    /// A block-start line opens a new block, closing and emitting any block
    /// already open. Subsequent lines are appended until a line carrying a
    /// dimension token closes the block. A block left open at end-of-input
    /// is emitted as-is. Text with no start markers yields an empty vec.
    ///
    /// No validation beyond the start marker happens here; malformed blocks
    /// are filtered downstream by the field extractor.
    pub fn segment(&self, text: &str) -> Vec<RawBlock> {
        let mut blocks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut in_block = false;

        for line in text.lines() {
            if self.patterns.is_block_start(line) {
                if in_block && !current.is_empty() {
                    blocks.push(RawBlock {
                        lines: std::mem::take(&mut current),
                    });
                }
                current = vec![line.to_string()];
                in_block = true;
            } else if in_block {
                current.push(line.to_string());
                if self.patterns.has_dimension_token(line) {
                    blocks.push(RawBlock {
                        lines: std::mem::take(&mut current),
                    });
                    in_block = false;
                }
            }
        }

        if in_block && !current.is_empty() {
            blocks.push(RawBlock { lines: current });
        }

        debug!("segmented {} product blocks", blocks.len());
        blocks
    }
}

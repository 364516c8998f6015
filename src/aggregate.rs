//! # Aggregation
//!
//! Reads every requested fragment, in order, into an [`AggregateBuffer`].
//!
//! Groups are visited in the order given and names within a group in the
//! order listed. Each fragment becomes one block. On output every block is
//! followed by exactly one empty line: a block that does not end in `\n`
//! gets `\n\n`, a block that already ends in `\n` gets a single `\n`.
//! Fragment bytes themselves are never altered.
//!
//! Aggregation is fail-fast. The first fragment that cannot be resolved or
//! read aborts the whole run and no buffer is returned, so nothing partial
//! can ever reach the destination.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::group::{FragmentGroup, FragmentRef};
use crate::locator;

/// One fragment read from the library.
#[derive(Debug, Clone)]
pub struct Block {
    pub fragment: FragmentRef,
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Ordered fragment contents awaiting a single write.
#[derive(Debug, Clone, Default)]
pub struct AggregateBuffer {
    blocks: Vec<Block>,
}

impl AggregateBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of fragments merged.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render the final document.
    pub fn render(&self) -> Vec<u8> {
        let capacity = self.blocks.iter().map(|b| b.content.len() + 2).sum();
        let mut out = Vec::with_capacity(capacity);
        for block in &self.blocks {
            out.extend_from_slice(&block.content);
            if !block.content.ends_with(b"\n") {
                out.push(b'\n');
            }
            out.push(b'\n');
        }
        out
    }

    /// Consume the buffer into the final document.
    pub fn into_bytes(self) -> Vec<u8> {
        self.render()
    }
}

/// Read every fragment of every group into one buffer.
pub fn aggregate(groups: &[FragmentGroup], library_root: &Path) -> Result<AggregateBuffer> {
    let mut buffer = AggregateBuffer::new();

    for fragment in groups.iter().flat_map(|group| group.refs()) {
        let path = locator::resolve_ref(library_root, &fragment)?;
        let content = fs::read(&path).map_err(|source| Error::FragmentRead {
            path: path.clone(),
            source,
        })?;

        if content.is_empty() {
            warn!("Fragment {} is empty", path.display());
        }
        debug!(
            "Merged {}:{} ({} bytes) from {}",
            fragment.directory,
            fragment.name,
            content.len(),
            path.display()
        );

        buffer.push(Block {
            fragment,
            path,
            content,
        });
    }

    Ok(buffer)
}

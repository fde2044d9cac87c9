//! Annotation blocks and the in-place rewrite of a single file.
//!
//! A file is rewritten as `block + "\n" + original`, where `block` is the
//! configured text with leading CR/LF characters removed. The rewrite seeks
//! back to offset 0, writes the new content and then truncates the file to
//! the written length, so no stale bytes can survive past the new end.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::core::errors::{HeadstampError, Result};

/// Normalised annotation text, ready to be prepended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationBlock {
    text: String,
}

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The block was prepended
    Annotated,
    /// The file already started with the block and was left alone
    AlreadyAnnotated,
}

impl AnnotationBlock {
    /// Strip leading CR/LF characters from `raw` and wrap the result.
    ///
    /// Fails when nothing but line breaks or whitespace remain.
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim_start_matches(['\r', '\n']);
        if text.trim().is_empty() {
            return Err(HeadstampError::config_field(
                "annotation text is empty after stripping leading line breaks",
                "annotation_text",
            ));
        }

        Ok(Self {
            text: text.to_string(),
        })
    }

    /// The stripped block text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bytes of the block followed by its separating newline.
    fn header_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.text.bytes().chain(std::iter::once(b'\n'))
    }

    /// Build the annotated content for `original`.
    pub fn render(&self, original: &[u8]) -> Vec<u8> {
        let mut content = Vec::with_capacity(self.text.len() + 1 + original.len());
        content.extend(self.header_bytes());
        content.extend_from_slice(original);
        content
    }

    /// Whether `content` already begins with this block and its newline.
    pub fn is_present_in(&self, content: &[u8]) -> bool {
        let header_len = self.text.len() + 1;
        content.len() >= header_len && self.header_bytes().eq(content[..header_len].iter().copied())
    }
}

/// Prepend `block` to the file at `path`.
///
/// With `skip_annotated` set, files that already begin with the block are
/// left untouched. The handle is dropped on every return path.
pub fn prepend_to_file(path: &Path, block: &AnnotationBlock, skip_annotated: bool) -> Result<FileOutcome> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| HeadstampError::io("Failed to open file for read/write", path, e))?;

    let mut original = Vec::new();
    file.read_to_end(&mut original)
        .map_err(|e| HeadstampError::io("Failed to read file", path, e))?;

    if skip_annotated && block.is_present_in(&original) {
        debug!("Already annotated, skipping: {}", path.display());
        return Ok(FileOutcome::AlreadyAnnotated);
    }

    rewrite_in_place(&mut file, &block.render(&original))
        .map_err(|e| HeadstampError::io("Failed to write annotated content", path, e))?;

    debug!(
        "Annotated {} ({} -> {} bytes)",
        path.display(),
        original.len(),
        original.len() + block.as_str().len() + 1
    );
    Ok(FileOutcome::Annotated)
}

/// Whether the file at `path` already begins with `block`. Read-only.
pub fn file_has_block(path: &Path, block: &AnnotationBlock) -> Result<bool> {
    let mut file = File::open(path).map_err(|e| HeadstampError::io("Failed to open file", path, e))?;

    let mut head = Vec::with_capacity(block.as_str().len() + 1);
    Read::by_ref(&mut file)
        .take(block.as_str().len() as u64 + 1)
        .read_to_end(&mut head)
        .map_err(|e| HeadstampError::io("Failed to read file", path, e))?;

    Ok(block.is_present_in(&head))
}

/// Replace the whole content of an open file with `content`.
pub(crate) fn rewrite_in_place(file: &mut File, content: &[u8]) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.write_all(content)?;
    file.set_len(content.len() as u64)?;
    file.flush()
}

//! Anchor-pair reader: consecutive `v` records grouped two by two.
//!
//! `o` and `f` records are skipped without being parsed.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use corelib::Vec3;

use crate::{
    error::{ObjError, ObjResult},
    mesh::AnchorPair,
    record::{self, Kind},
};

/// Pairs vertex `2k` with `2k + 1`. A trailing vertex without a partner is
/// dropped (and logged), not reported as an error.
pub fn extract_anchors(text: &str) -> ObjResult<Vec<AnchorPair>> {
    collect_pairs(text, false)
}

/// Like [`extract_anchors`], but a trailing unpaired vertex is an error.
pub fn extract_anchors_strict(text: &str) -> ObjResult<Vec<AnchorPair>> {
    collect_pairs(text, true)
}

/// Load anchor pairs from a file path.
pub fn load_anchors_from_path(path: impl AsRef<Path>, strict: bool) -> Result<Vec<AnchorPair>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read anchor file: {}", path.display()))?;
    let pairs = collect_pairs(&text, strict)
        .with_context(|| format!("Failed to read anchors from: {}", path.display()))?;
    log::info!("Loaded {} anchor pair(s) from {}", pairs.len(), path.display());
    Ok(pairs)
}

fn collect_pairs(text: &str, strict: bool) -> ObjResult<Vec<AnchorPair>> {
    let mut pairs = Vec::new();
    let mut pending: Option<(usize, Vec3)> = None;

    for line in record::lines(text).filter(|l| l.kind == Kind::Vertex) {
        let p = line.position()?;
        match pending.take() {
            None => pending = Some((line.number, p)),
            Some((_, first)) => pairs.push(AnchorPair::new(first, p)),
        }
    }

    if let Some((line, _)) = pending {
        if strict {
            return Err(ObjError::UnpairedAnchor { line });
        }
        log::warn!("Dropping unpaired anchor vertex on line {}", line);
    }
    Ok(pairs)
}

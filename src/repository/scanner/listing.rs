//! Loose object enumeration
//!
//! Lists `objects/xx/yyyy...` files in sorted order.

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::ObjectId;
use crate::repository::layout::RESERVED_OBJECT_DIRS;

/// Ids of every loose object file, plus the number of entries skipped
pub fn list_object_ids(objects_dir: &Path) -> Result<(Vec<ObjectId>, usize)> {
    let mut subdirs = Vec::new();
    let mut skipped = 0;

    let entries = std::fs::read_dir(objects_dir)
        .with_context(|| format!("Failed to list {}", objects_dir.display()))?;
    for entry in entries.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            skipped += 1;
            continue;
        };
        if name.len() != 2 || RESERVED_OBJECT_DIRS.contains(&name.as_str()) {
            continue;
        }
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            subdirs.push(name);
        }
    }
    subdirs.sort();

    let mut ids = Vec::new();
    for subdir in subdirs {
        let path = objects_dir.join(&subdir);
        let entries = match std::fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Skipping unreadable object directory {}: {}", path.display(), e);
                skipped += 1;
                continue;
            }
        };

        let mut files = Vec::new();
        for entry in entries.flatten() {
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                skipped += 1;
                continue;
            }
            match entry.file_name().into_string() {
                Ok(file) => files.push(file),
                Err(_) => skipped += 1,
            }
        }
        files.sort();
        ids.extend(files.into_iter().map(|file| ObjectId::from(format!("{subdir}{file}"))));
    }

    Ok((ids, skipped))
}

// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for building a lightbox collection.
//!
//! This module scans a directory for supported image formats, sorts them
//! according to the requested order, and turns each file into an [`Item`]
//! whose identifier is its file name.

use crate::domain::gallery::{Collection, Item, ItemId};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Image extensions the viewer can decode.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// How scanned files are ordered in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "name" | "alphabetical" => Ok(SortOrder::Alphabetical),
            "modified" => Ok(SortOrder::ModifiedDate),
            "created" => Ok(SortOrder::CreatedDate),
            other => Err(Error::Config(format!("unknown sort order: {other}"))),
        }
    }
}

/// A scanned collection and the item matching the file it was opened from.
#[derive(Debug, Clone)]
pub struct ScannedGallery {
    pub collection: Collection,
    pub selected: Option<ItemId>,
}

/// Scans the parent directory of `current_file`.
///
/// The scan succeeds even if `current_file` no longer exists; `selected` is
/// `None` in that case.
pub fn scan_around(current_file: &Path, sort_order: SortOrder) -> Result<ScannedGallery> {
    let parent = current_file
        .parent()
        .ok_or_else(|| Error::Io("No parent directory".into()))?;
    let collection = scan_directory(parent, sort_order)?;
    let selected = current_file
        .file_name()
        .map(|name| ItemId::new(name.to_string_lossy()))
        .filter(|id| collection.iter().any(|item| &item.id == id));
    Ok(ScannedGallery {
        collection,
        selected,
    })
}

/// Scans `directory` for supported images.
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Collection> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);
    tracing::debug!(directory = %directory.display(), count = image_files.len(), "directory scanned");

    Ok(image_files.iter().map(|path| item_for(path)).collect::<Vec<_>>().into())
}

/// Builds an item for an image file. Dimensions are read from the header
/// and left out when the file cannot be decoded.
fn item_for(path: &Path) -> Item {
    let name = path
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    let mut item = Item::new(name, path.to_string_lossy());

    if let Some(stem) = path.file_stem() {
        item = item.with_caption(stem.to_string_lossy());
    }
    match image_rs::image_dimensions(path) {
        Ok((width, height)) => item.with_size(width, height),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "image dimensions unavailable");
            item
        }
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Sorts image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Saving the displayed item to disk.
//!
//! Remote sources (`http://`, `https://`) are streamed with `reqwest`;
//! anything else is treated as a local path (optionally `file://`) and
//! copied.

use crate::config::paths;
use crate::error::{Error, Result};
use crate::lightbox::DownloadRequest;
use futures_util::{Stream, StreamExt};
use std::io::Write;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("IcedLightbox/", env!("CARGO_PKG_VERSION"));

/// Upper bound on numbered variants tried for a free file name.
const MAX_NAME_ATTEMPTS: u32 = 1_000;

/// True for `http(s)://` sources.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Returns `directory/file_name`, or `name (n).ext` when that already exists.
///
/// # Errors
///
/// Returns an error if no free name is found.
pub fn unique_destination(directory: &Path, file_name: &str) -> Result<PathBuf> {
    let candidate = directory.join(file_name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map_or_else(|| file_name.to_string(), |s| s.to_string_lossy().into_owned());
    let extension = name.extension().map(|e| e.to_string_lossy().into_owned());

    for n in 1..=MAX_NAME_ATTEMPTS {
        let numbered = match &extension {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        };
        let candidate = directory.join(numbered);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(Error::Download(format!(
        "no free file name for {file_name} in {}",
        directory.display()
    )))
}

/// Saves the request into the platform download directory.
///
/// # Errors
///
/// Returns an error if no download directory can be determined or the
/// transfer fails.
pub async fn save_to_download_dir(request: &DownloadRequest) -> Result<PathBuf> {
    let directory = paths::get_download_dir()
        .ok_or_else(|| Error::Download("no download directory available".to_string()))?;
    save_to_directory(request, &directory).await
}

/// Saves the request into `directory` under its suggested file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the transfer fails.
pub async fn save_to_directory(request: &DownloadRequest, directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;
    let destination = unique_destination(directory, &request.file_name)?;
    save_to_path(request, &destination).await?;
    Ok(destination)
}

/// Saves the request's source to `destination`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns an error if the source cannot be fetched or the file cannot be
/// written.
pub async fn save_to_path(request: &DownloadRequest, destination: &Path) -> Result<u64> {
    let written = if is_remote(&request.source) {
        fetch(&request.source, destination).await?
    } else {
        let local = request
            .source
            .strip_prefix("file://")
            .unwrap_or(&request.source);
        std::fs::copy(local, destination)?
    };
    tracing::info!(
        item = %request.item,
        destination = %destination.display(),
        bytes = written,
        "item saved"
    );
    Ok(written)
}

async fn fetch(url: &str, destination: &Path) -> Result<u64> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Download(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    write_stream(response.bytes_stream(), destination).await
}

/// Writes every chunk of `stream` to a new file at `destination`.
///
/// On any failure, whether the stream or the disk, the partial file is
/// removed before the error is returned.
async fn write_stream<S, B, E>(stream: S, destination: &Path) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    Error: From<E>,
{
    let mut file = std::fs::File::create(destination)?;
    let outcome = copy_chunks(std::pin::pin!(stream), &mut file).await;
    drop(file);

    if outcome.is_err() {
        if let Err(err) = std::fs::remove_file(destination) {
            tracing::warn!(
                %err,
                destination = %destination.display(),
                "partial file left behind"
            );
        }
    }
    outcome
}

async fn copy_chunks<S, B, E>(
    mut stream: std::pin::Pin<&mut S>,
    file: &mut std::fs::File,
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    Error: From<E>,
{
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(chunk.as_ref())?;
        written += chunk.as_ref().len() as u64;
    }
    file.flush()?;
    Ok(written)
}

//! Gallery discovery: manifest first, sequential probing as the fallback.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::model::{Discovery, GalleryEntry};
use crate::net::ImageSource;

/// Runs discovery to completion, handing each entry to `sink` as soon as it
/// is known so the grid fills in progressively.
pub async fn resolve<S, F>(config: &GalleryConfig, source: &S, mut sink: F) -> Discovery
where
    S: ImageSource,
    F: FnMut(GalleryEntry),
{
    match load_manifest(config, source).await {
        Ok(names) => {
            let count = names.len() as u32;
            for (i, name) in names.iter().enumerate() {
                sink(GalleryEntry::new(i as u32 + 1, config.asset_url(name)));
            }
            tracing::info!(count, "gallery loaded from manifest");
            return Discovery::Manifest { count };
        }
        Err(err) => tracing::info!("{err}; probing for {}<n>.<ext>", config.prefix),
    }
    let outcome = probe(config, source, sink).await;
    if outcome.is_empty() {
        tracing::info!(?outcome, "no gallery images found");
    } else {
        tracing::info!(?outcome, "gallery probing finished");
    }
    outcome
}

pub async fn load_manifest<S: ImageSource>(
    config: &GalleryConfig,
    source: &S,
) -> Result<Vec<String>, GalleryError> {
    let body = source.fetch_text(&config.manifest_url()).await?;
    parse_manifest(&body)
}

/// Accepts only a non-empty JSON array of strings.
pub fn parse_manifest(body: &str) -> Result<Vec<String>, GalleryError> {
    let names: Vec<String> = serde_json::from_str(body).map_err(GalleryError::Malformed)?;
    if names.is_empty() {
        return Err(GalleryError::Empty);
    }
    Ok(names)
}

/// Walks `1..=max_files`, stopping once `gap_limit` consecutive indices
/// had no file under any extension.
pub async fn probe<S, F>(config: &GalleryConfig, source: &S, mut sink: F) -> Discovery
where
    S: ImageSource,
    F: FnMut(GalleryEntry),
{
    let mut gap = 0;
    let mut found = 0;
    let mut last_index = 0;
    for index in 1..=config.max_files {
        last_index = index;
        match probe_index(config, source, index).await {
            Some(src) => {
                sink(GalleryEntry::new(index, src));
                found += 1;
                gap = 0;
            }
            None => {
                gap += 1;
                if gap >= config.gap_limit {
                    break;
                }
            }
        }
    }
    Discovery::Probed { found, last_index }
}

/// First extension with an existing file for `index`. Request failures
/// count as a miss for that extension.
async fn probe_index<S: ImageSource>(
    config: &GalleryConfig,
    source: &S,
    index: u32,
) -> Option<String> {
    for ext in &config.extensions {
        let src = config.candidate_url(index, ext);
        match source.exists(&src).await {
            Ok(true) => return Some(src),
            Ok(false) => {}
            Err(err) => tracing::debug!("probe skipped: {err}"),
        }
    }
    None
}

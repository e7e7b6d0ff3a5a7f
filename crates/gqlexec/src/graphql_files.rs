use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Normalizes extensions to their dotless form so `.graphql` and `graphql`
/// both match.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Recursively collects every file at or under `paths` whose extension is
/// one of `exts`.
///
/// A single file argument is always kept, even when its extension doesn't
/// match: naming one file explicitly means it should be loaded.
pub(crate) fn discover(
    paths: &[PathBuf],
    exts: &HashSet<String>,
) -> anyhow::Result<GraphQLFiles> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = GraphQLFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!(
                "Failed to list files at or under {path:#?}",
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            if has_ext(entry_path, exts) {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.file_paths.push(canonicalize(entry_path)?);
            } else {
                found.num_skipped_files += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        let first_path = canonicalize(first_path)?;
        log::warn!(
            "Proceeding to load {first_path:#?} even though it doesn't match \
            any of the GraphQL file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files -= 1;
        found.file_paths.push(first_path);
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    Ok(found)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:#?}"))
}

fn has_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| exts.contains(ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

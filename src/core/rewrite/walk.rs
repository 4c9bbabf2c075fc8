//! Directory walk and in-place rewrite of eligible files.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use super::case::WordPair;
use crate::defaults::RecaseConfig;
use crate::error::{Error, Result};
use crate::output::RewriteSummary;
use crate::utils::io;

/// Options for one rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    pub config: RecaseConfig,
    /// Record per-file failures and continue instead of aborting the walk.
    pub keep_going: bool,
}

/// Rewrite every eligible file under `root` with the built-in word pair and
/// default configuration. `on_update` is called once per file that changed.
pub fn process(
    root: &Path,
    on_update: &mut impl FnMut(&Path) -> Result<()>,
) -> Result<RewriteSummary> {
    process_directory(root, WordPair::builtin(), &RewriteOptions::default(), on_update)
}

/// Rewrite every eligible file under `root`, depth first.
///
/// A file is only written when its substituted content differs from what was
/// read. Without `keep_going`, the first read, decode or write failure aborts
/// the walk. Directory enumeration failures and `on_update` failures always
/// abort, with or without `keep_going`.
pub fn process_directory(
    root: &Path,
    pair: &WordPair,
    options: &RewriteOptions,
    on_update: &mut impl FnMut(&Path) -> Result<()>,
) -> Result<RewriteSummary> {
    let mut summary = RewriteSummary::new(root.display().to_string());

    log_status!("recase", "Scanning {}", root.display());

    walk_eligible_files(root, &options.config.extensions, &mut |path| {
        summary.record_scanned();
        match rewrite_file(path, pair) {
            Ok(true) => {
                summary.record_updated(path.display().to_string());
                on_update(path)
            }
            Ok(false) => Ok(()),
            Err(err) if options.keep_going => {
                log_status!("recase", "Skipping {}: {}", path.display(), err);
                summary.record_failure(path.display().to_string(), &err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    })?;

    log_status!(
        "recase",
        "{} of {} file(s) updated",
        summary.files_updated,
        summary.files_scanned
    );

    Ok(summary)
}

/// Substitute one file in place. Returns whether the file was rewritten.
pub fn rewrite_file(path: &Path, pair: &WordPair) -> Result<bool> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    let rewritten = pair.substitute(&content);

    if rewritten == content.as_str() {
        return Ok(false);
    }

    io::write_file(path, &rewritten, &format!("write {}", path.display()))?;
    Ok(true)
}

/// Case-sensitive suffix match on the raw file name.
pub fn is_eligible(file_name: &OsStr, extensions: &[String]) -> bool {
    let name = file_name.as_encoded_bytes();
    extensions.iter().any(|ext| name.ends_with(ext.as_bytes()))
}

/// Recursively visit regular files whose names end with one of `extensions`.
///
/// Symlinks are neither followed nor visited.
fn walk_eligible_files(
    dir: &Path,
    extensions: &[String],
    callback: &mut impl FnMut(&Path) -> Result<()>,
) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read dir {}", dir.display())))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("read dir {}", dir.display())))
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("stat {}", path.display())))
        })?;

        if file_type.is_dir() {
            walk_eligible_files(&path, extensions, callback)?;
        } else if file_type.is_file() && is_eligible(&entry.file_name(), extensions) {
            callback(&path)?;
        }
    }

    Ok(())
}

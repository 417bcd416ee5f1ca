use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, IntoInnerError, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replace every literal occurrence of `pattern` with `substitution`, line by line.
///
/// Lines are streamed into a scratch file next to `path`. When at least one line
/// contained `pattern`, the scratch file takes over the original's permissions and
/// is renamed over it; otherwise the original is left untouched and the scratch
/// file is removed. Line endings are copied as they are, so lines without a match
/// stay byte-identical. Matching is done on bytes, so files that are not valid
/// UTF-8 are patched like any other.
///
/// Returns whether any line contained `pattern`. An empty pattern never matches.
///
/// # Errors
/// Returns error if the file cannot be read, or the scratch file cannot be
/// written or moved into place.
pub fn replace_in_file(path: &Path, pattern: &str, substitution: &str) -> Result<bool> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let permissions = file
        .metadata()
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?
        .permissions();

    let scratch_dir = scratch_dir(path);
    let scratch = NamedTempFile::new_in(scratch_dir).with_context(|| {
        format!(
            "Failed to create scratch file in {}",
            scratch_dir.display()
        )
    })?;

    let pattern = pattern.as_bytes();
    let substitution = substitution.as_bytes();
    let mut reader = BufReader::new(file);
    let mut writer = BufWriter::new(scratch);
    let mut found = false;
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if read == 0 {
            break;
        }
        let (body, ending) = split_line_ending(&line);
        if contains_bytes(body, pattern) {
            found = true;
            writer.write_all(&replace_bytes(body, pattern, substitution))?;
        } else {
            writer.write_all(body)?;
        }
        writer.write_all(ending)?;
    }

    if !found {
        // dropping the writer deletes the scratch file
        return Ok(false);
    }

    let scratch = writer
        .into_inner()
        .map_err(IntoInnerError::into_error)
        .context("Failed to flush scratch file")?;
    scratch
        .as_file()
        .set_permissions(permissions)
        .context("Failed to copy permissions to scratch file")?;
    scratch.as_file().sync_all()?;
    scratch
        .persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(true)
}

/// Count the lines of `path` containing `pattern`, without modifying anything.
///
/// # Errors
/// Returns error if the file cannot be opened or read.
pub fn count_matching_lines(path: &Path, pattern: &str) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let pattern = pattern.as_bytes();
    let mut reader = BufReader::new(file);
    let mut count = 0;
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if read == 0 {
            break;
        }
        if contains_bytes(split_line_ending(&line).0, pattern) {
            count += 1;
        }
    }
    Ok(count)
}

/// Directory receiving the scratch file; same filesystem as `path` so the rename is atomic
fn scratch_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    if line.ends_with(b"\r\n") {
        line.split_at(line.len() - 2)
    } else if line.ends_with(b"\n") {
        line.split_at(line.len() - 1)
    } else {
        (line, &[])
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// An empty needle never matches
fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    find_bytes(haystack, needle).is_some()
}

/// Replace every non-overlapping occurrence of `needle`, scanning left to right
fn replace_bytes(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut replaced = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = find_bytes(rest, needle) {
        replaced.extend_from_slice(&rest[..pos]);
        replaced.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }
    replaced.extend_from_slice(rest);
    replaced
}

// File: crates/chart-core/src/artifact.rs
// Summary: Output artifact model and all-or-nothing file replacement (temp sibling + rename).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{RenderError, RenderResult};

/// The image file produced by one render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    /// Pixel size after cropping.
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
}

/// Fail early if `path` cannot become a file: its parent must already exist
/// (we never create directories) and the path itself must not be a directory.
pub(crate) fn check_target(path: &Path) -> RenderResult<()> {
    if path.file_name().is_none() {
        return Err(RenderError::invalid(format!("output path {} has no file name", path.display())));
    }
    let parent = parent_dir(path);
    if !parent.is_dir() {
        return Err(RenderError::io(
            parent,
            std::io::Error::new(std::io::ErrorKind::NotFound, "output directory does not exist"),
        ));
    }
    if path.is_dir() {
        return Err(RenderError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::Other, "output path is a directory"),
        ));
    }
    Ok(())
}

/// Write `data` to `path` so that readers see either the old file or the
/// complete new one, never a truncated PNG.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> RenderResult<u64> {
    check_target(path)?;
    let tmp = TempSibling::for_target(path);

    let mut file = fs::File::create(&tmp.path).map_err(|e| RenderError::io(&tmp.path, e))?;
    file.write_all(data).map_err(|e| RenderError::io(&tmp.path, e))?;
    file.sync_all().map_err(|e| RenderError::io(&tmp.path, e))?;
    drop(file);

    fs::rename(&tmp.path, path).map_err(|e| RenderError::io(path, e))?;
    tmp.disarm();
    Ok(data.len() as u64)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Hidden temp file next to the target, unique per write; removed on drop unless renamed.
struct TempSibling {
    path: PathBuf,
    armed: bool,
}

impl TempSibling {
    fn for_target(target: &Path) -> Self {
        let name = target.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = parent_dir(target).join(format!(".{name}.{}.{seq}.tmp", std::process::id()));
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TempSibling {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

//! Icon generation: render a recipe, encode it, and write it to disk

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::icons::{self, IconDefinition};
use crate::rendering::raster::{encode_png, rasterize};
use crate::rendering::Canvas;
use crate::{CanvasSize, Error, GeneratorConfig, Result};

/// Paint a definition onto a fresh canvas without touching the filesystem.
pub fn render(def: &IconDefinition, size: CanvasSize) -> Result<Canvas> {
    debug!("rendering '{}' ({} commands)", def.name, def.commands.len());
    rasterize(&def.commands, size)
}

/// Where `def` will be written under `config`.
pub fn output_path(def: &IconDefinition, config: &GeneratorConfig) -> PathBuf {
    config.output_dir.join(def.file_name)
}

/// Generate one icon file and return the path it was written to.
///
/// Rendering and encoding happen before any filesystem access, so a render
/// failure leaves the disk untouched. An existing file at the target path
/// is replaced.
pub fn generate(def: &IconDefinition, config: &GeneratorConfig) -> Result<PathBuf> {
    let canvas = render(def, config.canvas)?;
    let png = encode_png(&canvas)?;
    drop(canvas);

    let path = output_path(def, config);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    write_file(&path, &png, config.atomic_write)?;

    info!("wrote {} ({} bytes)", path.display(), png.len());
    Ok(path)
}

/// Generate every built-in icon in order, stopping at the first failure.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    icons::builtin()
        .iter()
        .map(|def| generate(def, config))
        .collect()
}

fn write_file(path: &Path, bytes: &[u8], atomic: bool) -> Result<()> {
    if !atomic {
        return fs::write(path, bytes).map_err(|e| Error::io(path, e));
    }

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(path, e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::io(path, e)
    })
}

// `ic_refresh.png` -> `ic_refresh.png.tmp`, in the same directory so the
// rename never crosses filesystems.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
#[cfg(feature = "gui")]
use raylib::prelude::{Image, RaylibHandle, RaylibThread, Texture2D};

use crate::error::{Result, ShowcaseError};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

fn is_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Certificate images in a directory, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path).map_err(|e| ShowcaseError::io(dir_path, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ShowcaseError::io(dir_path, e))?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(ShowcaseError::NoImages(dir_path.to_path_buf()));
    }
    debug!("Found {} certificate images in {}", paths.len(), dir_path.display());
    Ok(paths)
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
pub fn read_orientation(bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("No EXIF data: {}", e);
            return 1;
        }
    };

    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

/// Quarter turns (clockwise) needed to show an image upright.
/// Mirrored orientations are treated as their unmirrored rotation.
pub fn quarter_turns(orientation: u16) -> u8 {
    match orientation {
        3 | 4 => 2,
        5 | 6 => 1,
        7 | 8 => 3,
        _ => 0,
    }
}

// --- Load image, apply EXIF rotation, create texture ---
#[cfg(feature = "gui")]
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let image_error = |message: String| ShowcaseError::Image {
        path: image_path.to_path_buf(),
        message,
    };

    let file_bytes = fs::read(image_path).map_err(|e| ShowcaseError::io(image_path, e))?;
    let extension = extension_of(image_path);

    // Only JPEGs carry a usable orientation tag
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| image_error(e.to_string()))?;

    match quarter_turns(orientation) {
        1 => image.rotate_cw(),
        2 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        3 => image.rotate_ccw(),
        _ => {}
    }
    if orientation > 1 {
        debug!("Rotated {} for EXIF orientation {}", image_path.display(), orientation);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| image_error(e.to_string()))
}

/// One carousel slide's image: decoded, or a stand-in for a file that failed.
#[derive(Debug)]
pub enum Certificate<T> {
    Loaded(T),
    Missing(PathBuf),
}

impl<T> Certificate<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Certificate::Missing(_))
    }
}

/// Loads every path with `load`. Failures keep their slot as a placeholder so
/// the slide count always matches the discovered images.
pub fn load_certificates<T>(
    paths: &[PathBuf],
    mut load: impl FnMut(&Path) -> Result<T>,
) -> Vec<Certificate<T>> {
    paths
        .iter()
        .map(|path| match load(path) {
            Ok(image) => Certificate::Loaded(image),
            Err(e) => {
                warn!("Showing placeholder for certificate: {}", e);
                Certificate::Missing(path.clone())
            }
        })
        .collect()
}

#[cfg(feature = "gui")]
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: &[PathBuf],
) -> Vec<Certificate<Texture2D>> {
    load_certificates(paths, |path| load_texture_with_exif_rotation(rl, thread, path))
}

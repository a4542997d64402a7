/// Wardrobe catalog loader
///
/// Scans `<base>/<category>/` for image files, decodes each one and
/// resizes it for display. The catalog is built once per scan and never
/// mutated afterwards; a rescan replaces it wholesale.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use walkdir::WalkDir;

use super::data::{Category, Garment};

/// Display size for garment images (square)
pub const DISPLAY_SIZE: u32 = 160;

/// Recognized image extensions, matched case-insensitively
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// All garments available to the app, grouped by category.
///
/// Each category holds its garments in filename order. A category whose
/// folder is missing or empty simply has no garments.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    garments: BTreeMap<Category, Vec<Garment>>,
}

impl Catalog {
    /// Garments in one category, in filename order.
    pub fn garments(&self, category: Category) -> &[Garment] {
        self.garments
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of garments in one category.
    pub fn len(&self, category: Category) -> usize {
        self.garments(category).len()
    }

    /// Whether a category has no garments at all.
    pub fn is_empty(&self, category: Category) -> bool {
        self.garments(category).is_empty()
    }

    /// Garment at a given index, if in range.
    pub fn get(&self, category: Category, index: usize) -> Option<&Garment> {
        self.garments(category).get(index)
    }

    /// Index of a garment by exact filename match.
    pub fn position(&self, category: Category, filename: &str) -> Option<usize> {
        self.garments(category)
            .iter()
            .position(|g| g.filename == filename)
    }

    /// Total garment count across all categories.
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&c| self.len(c)).sum()
    }

    pub(crate) fn set_garments(&mut self, category: Category, garments: Vec<Garment>) {
        self.garments.insert(category, garments);
    }
}

/// Result of scanning a wardrobe folder.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub catalog: Catalog,
    /// Files that matched an image extension but failed to decode.
    /// Reported here instead of being swallowed so the caller can log them.
    pub skipped: Vec<PathBuf>,
}

/// Scan a wardrobe folder and build the catalog.
///
/// A missing base folder or category folder yields an empty catalog for
/// that category, not an error. Undecodable files are collected in
/// `skipped`.
pub fn scan(base: &Path) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for category in Category::ALL {
        let dir = base.join(category.dir_name());
        let mut garments = Vec::new();

        // Depth 1: only files directly inside the category folder.
        // A missing folder produces a single error entry, filtered out here.
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !has_image_extension(path) {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().to_string();
            match load_display_image(path) {
                Some(handle) => garments.push(Garment { filename, handle }),
                None => outcome.skipped.push(path.to_path_buf()),
            }
        }

        outcome.catalog.set_garments(category, garments);
    }

    outcome
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decode and resize one image for display. Returns None on any decode
/// failure; the caller records the path as skipped.
fn load_display_image(path: &Path) -> Option<iced::widget::image::Handle> {
    let img = image::open(path).ok()?;
    let resized = img.resize_exact(DISPLAY_SIZE, DISPLAY_SIZE, FilterType::Triangle);
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(iced::widget::image::Handle::from_rgba(
        width,
        height,
        rgba.into_raw(),
    ))
}

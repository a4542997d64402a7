/// Per-category slot selection
///
/// Each slot is either empty or points at one garment in its category's
/// catalog. Navigation wraps cyclically, so the index is always in range
/// while the slot is active.

use std::collections::BTreeMap;

use super::catalog::Catalog;
use super::data::{Category, Garment};

/// Direction for cyclic slot navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Which garment, if any, each slot currently shows.
///
/// A category absent from the map means its slot is empty.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    indices: BTreeMap<Category, usize>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index for a category, if the slot is active.
    pub fn index(&self, category: Category) -> Option<usize> {
        self.indices.get(&category).copied()
    }

    /// Activate a slot on the first garment. No-op when the category has
    /// no garments, so an empty catalog can never hold a present index.
    pub fn activate(&mut self, category: Category, catalog: &Catalog) {
        if !catalog.is_empty(category) {
            self.indices.insert(category, 0);
        }
    }

    /// Clear a slot unconditionally.
    pub fn deactivate(&mut self, category: Category) {
        self.indices.remove(&category);
    }

    /// Step the slot one garment forward or backward, wrapping at the
    /// ends. No-op when the slot is empty or the category has no garments.
    pub fn advance(&mut self, category: Category, direction: Direction, catalog: &Catalog) {
        let len = catalog.len(category);
        if len == 0 {
            return;
        }
        if let Some(index) = self.indices.get_mut(&category) {
            *index = match direction {
                Direction::Forward => (*index + 1) % len,
                Direction::Backward => (*index + len - 1) % len,
            };
        }
    }

    /// The garment currently shown in a slot, or None when empty.
    pub fn current<'a>(&self, category: Category, catalog: &'a Catalog) -> Option<&'a Garment> {
        self.index(category)
            .and_then(|index| catalog.get(category, index))
    }

    /// Resolved filename per category, for building an outfit record.
    /// Every category appears in the result; empty slots map to None.
    pub fn selections(&self, catalog: &Catalog) -> BTreeMap<Category, Option<String>> {
        Category::ALL
            .iter()
            .map(|&category| {
                let filename = self.current(category, catalog).map(|g| g.filename.clone());
                (category, filename)
            })
            .collect()
    }

    /// Apply a stored record's filenames to the slots.
    ///
    /// A filename still present in the catalog resolves to its index;
    /// a missing filename (or a category absent from the record) degrades
    /// that slot to empty without touching the others.
    pub fn apply(&mut self, files: &BTreeMap<Category, Option<String>>, catalog: &Catalog) {
        for category in Category::ALL {
            let resolved = files
                .get(&category)
                .and_then(|filename| filename.as_deref())
                .and_then(|filename| catalog.position(category, filename));
            match resolved {
                Some(index) => {
                    self.indices.insert(category, index);
                }
                None => {
                    self.indices.remove(&category);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garment(filename: &str) -> Garment {
        Garment {
            filename: filename.to_string(),
            handle: iced::widget::image::Handle::from_rgba(1, 1, vec![0u8; 4]),
        }
    }

    fn catalog_with(category: Category, filenames: &[&str]) -> Catalog {
        let mut catalog = Catalog::default();
        catalog.set_garments(category, filenames.iter().map(|f| garment(f)).collect());
        catalog
    }

    #[test]
    fn activate_on_empty_category_is_a_no_op() {
        let catalog = Catalog::default();
        let mut slots = Slots::new();
        slots.activate(Category::Jacket, &catalog);
        assert_eq!(slots.index(Category::Jacket), None);
    }

    #[test]
    fn activate_selects_first_garment() {
        let catalog = catalog_with(Category::Shirt, &["a.png", "b.png"]);
        let mut slots = Slots::new();
        slots.activate(Category::Shirt, &catalog);
        assert_eq!(slots.index(Category::Shirt), Some(0));
        assert_eq!(
            slots.current(Category::Shirt, &catalog).unwrap().filename,
            "a.png"
        );
    }

    #[test]
    fn advance_wraps_in_both_directions() {
        let catalog = catalog_with(Category::Pants, &["a.png", "b.png", "c.png"]);
        let mut slots = Slots::new();
        slots.activate(Category::Pants, &catalog);

        slots.advance(Category::Pants, Direction::Backward, &catalog);
        assert_eq!(slots.index(Category::Pants), Some(2));

        slots.advance(Category::Pants, Direction::Forward, &catalog);
        assert_eq!(slots.index(Category::Pants), Some(0));
    }

    #[test]
    fn advance_is_a_cyclic_bijection() {
        let names: Vec<String> = (0..7).map(|i| format!("{i}.png")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_with(Category::Shoes, &refs);

        let mut slots = Slots::new();
        slots.activate(Category::Shoes, &catalog);
        slots.advance(Category::Shoes, Direction::Forward, &catalog);
        let start = slots.index(Category::Shoes);

        for _ in 0..7 {
            slots.advance(Category::Shoes, Direction::Forward, &catalog);
            let index = slots.index(Category::Shoes).unwrap();
            assert!(index < 7);
        }
        for _ in 0..7 {
            slots.advance(Category::Shoes, Direction::Backward, &catalog);
        }
        assert_eq!(slots.index(Category::Shoes), start);
    }

    #[test]
    fn advance_on_empty_slot_is_a_no_op() {
        let catalog = catalog_with(Category::Jacket, &["a.png"]);
        let mut slots = Slots::new();
        slots.advance(Category::Jacket, Direction::Forward, &catalog);
        assert_eq!(slots.index(Category::Jacket), None);
    }

    #[test]
    fn selections_cover_every_category() {
        let catalog = catalog_with(Category::Jacket, &["a.png"]);
        let mut slots = Slots::new();
        slots.activate(Category::Jacket, &catalog);

        let selections = slots.selections(&catalog);
        assert_eq!(selections.len(), Category::ALL.len());
        assert_eq!(
            selections[&Category::Jacket],
            Some("a.png".to_string())
        );
        assert_eq!(selections[&Category::Shoes], None);
    }

    #[test]
    fn apply_resolves_present_files_and_degrades_missing_ones() {
        let mut catalog = catalog_with(Category::Jacket, &["a.png", "b.png"]);
        catalog.set_garments(Category::Pants, vec![garment("x.png")]);

        let mut slots = Slots::new();
        slots.activate(Category::Pants, &catalog);

        let mut files = BTreeMap::new();
        files.insert(Category::Jacket, Some("b.png".to_string()));
        files.insert(Category::Pants, Some("vanished.png".to_string()));

        slots.apply(&files, &catalog);
        assert_eq!(slots.index(Category::Jacket), Some(1));
        // Stored file no longer exists: that slot degrades to empty.
        assert_eq!(slots.index(Category::Pants), None);
        // Categories absent from the record are empty too.
        assert_eq!(slots.index(Category::Shirt), None);
    }
}

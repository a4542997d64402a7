/// Shared data structures for the application state
///
/// These types represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::{Deserialize, Serialize};

/// The fixed set of clothing categories, in display order.
///
/// The lowercase serialized form doubles as the subdirectory name under
/// the wardrobe folder and as the key in persisted outfit records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jacket,
    Shirt,
    Accessory,
    Pants,
    Shoes,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Jacket,
        Category::Shirt,
        Category::Accessory,
        Category::Pants,
        Category::Shoes,
    ];

    /// Subdirectory name under the wardrobe base folder.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Jacket => "jacket",
            Category::Shirt => "shirt",
            Category::Accessory => "accessory",
            Category::Pants => "pants",
            Category::Shoes => "shoes",
        }
    }

    /// Capitalized label for the slot header.
    pub fn label(self) -> &'static str {
        match self {
            Category::Jacket => "Jacket",
            Category::Shirt => "Shirt",
            Category::Accessory => "Accessory",
            Category::Pants => "Pants",
            Category::Shoes => "Shoes",
        }
    }
}

/// A single garment image available in one category.
#[derive(Debug, Clone)]
pub struct Garment {
    /// Filename only (e.g. "blue_jacket.png"), the persisted identifier
    pub filename: String,
    /// Decoded image, already resized for display
    pub handle: iced::widget::image::Handle,
}

/// State management module
///
/// This module handles all application state, including:
/// - Wardrobe scanning and the image catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - Per-category slot selection (slots.rs)
/// - The JSON-backed outfit store (store.rs)

pub mod catalog;
pub mod data;
pub mod slots;
pub mod store;

use iced::widget::{button, column, container, image, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

// Declare the state module
mod state;

use state::catalog::{self, Catalog, ScanOutcome, DISPLAY_SIZE};
use state::data::Category;
use state::slots::{Direction, Slots};
use state::store::{OutfitStore, StoreError};

/// Default wardrobe folder, one subdirectory per category
const DEFAULT_WARDROBE_DIR: &str = "wardrobe";
/// Default outfit document, relative to the working directory
const DEFAULT_OUTFITS_FILE: &str = "outfits.json";

/// Main application state
struct OutfitStudio {
    /// Folder currently scanned for garments
    wardrobe_dir: PathBuf,
    /// Garments available per category
    catalog: Catalog,
    /// What each slot currently shows
    slots: Slots,
    /// The outfit document on disk
    store: OutfitStore,
    /// Saved outfit names, in stored order
    outfit_names: Vec<String>,
    /// Name currently picked in the outfit selector
    selected_outfit: Option<String>,
    /// Contents of the save-as name field
    name_input: String,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background wardrobe scan finished
    ScanComplete(ScanOutcome),
    /// User clicked the "Choose Wardrobe" button
    ChooseWardrobe,
    /// User asked to rescan the current wardrobe folder
    Rescan,
    /// "+" button on a slot
    AddSlot(Category),
    /// "x" button on a slot
    RemoveSlot(Category),
    /// "<" or ">" button on a slot
    Navigate(Category, Direction),
    /// Save-as name field edited
    NameChanged(String),
    /// "Save outfit" button
    SaveOutfit,
    /// Selector choice changed
    OutfitPicked(String),
    /// "Show" button: load the selected outfit
    LoadOutfit,
    /// "Delete" button: drop the selected outfit
    DeleteOutfit,
}

impl OutfitStudio {
    /// Create a new instance of the application and kick off the
    /// initial wardrobe scan in the background.
    fn new() -> (Self, Task<Message>) {
        let wardrobe_dir = PathBuf::from(DEFAULT_WARDROBE_DIR);
        let store = OutfitStore::new(DEFAULT_OUTFITS_FILE);

        let outfit_names = store.list_names();
        let selected_outfit = outfit_names.first().cloned();

        let app = OutfitStudio {
            wardrobe_dir: wardrobe_dir.clone(),
            catalog: Catalog::default(),
            slots: Slots::new(),
            store,
            outfit_names,
            selected_outfit,
            name_input: String::new(),
            status: format!("Scanning {}...", wardrobe_dir.display()),
        };

        (
            app,
            Task::perform(scan_wardrobe_async(wardrobe_dir), Message::ScanComplete),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScanComplete(outcome) => {
                for path in &outcome.skipped {
                    eprintln!("⚠️  Skipping unreadable image: {}", path.display());
                }
                self.catalog = outcome.catalog;
                // Slots start empty after every scan; stale indices would
                // otherwise point into the old catalog.
                self.slots = Slots::new();
                self.status = format!(
                    "{} garments loaded from {}",
                    self.catalog.total(),
                    self.wardrobe_dir.display()
                );
                Task::none()
            }
            Message::ChooseWardrobe => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Wardrobe Folder")
                    .pick_folder();

                if let Some(folder) = folder {
                    self.wardrobe_dir = folder.clone();
                    self.status = format!("Scanning {}...", folder.display());
                    return Task::perform(scan_wardrobe_async(folder), Message::ScanComplete);
                }

                Task::none()
            }
            Message::Rescan => {
                self.status = format!("Scanning {}...", self.wardrobe_dir.display());
                Task::perform(
                    scan_wardrobe_async(self.wardrobe_dir.clone()),
                    Message::ScanComplete,
                )
            }
            Message::AddSlot(category) => {
                self.slots.activate(category, &self.catalog);
                Task::none()
            }
            Message::RemoveSlot(category) => {
                self.slots.deactivate(category);
                Task::none()
            }
            Message::Navigate(category, direction) => {
                self.slots.advance(category, direction, &self.catalog);
                Task::none()
            }
            Message::NameChanged(value) => {
                self.name_input = value;
                Task::none()
            }
            Message::SaveOutfit => {
                let name = self.name_input.trim().to_string();
                match self.store.save(&name, self.slots.selections(&self.catalog)) {
                    Ok(()) => {
                        self.outfit_names = self.store.list_names();
                        self.selected_outfit = Some(name.clone());
                        self.name_input.clear();
                        self.status = format!("Saved outfit '{name}'");
                    }
                    Err(StoreError::EmptyName) => {
                        self.status = String::from("Enter a name before saving");
                    }
                    Err(err) => {
                        eprintln!("⚠️  Save failed: {err}");
                        self.status = format!("Save failed: {err}");
                    }
                }
                Task::none()
            }
            Message::OutfitPicked(name) => {
                self.selected_outfit = Some(name);
                Task::none()
            }
            Message::LoadOutfit => {
                if let Some(name) = self.selected_outfit.clone() {
                    // Unknown names are a no-op, matching the store contract.
                    if let Some(record) = self.store.find(&name) {
                        self.slots.apply(&record.files, &self.catalog);
                        self.status = format!("Loaded outfit '{name}'");
                    }
                }
                Task::none()
            }
            Message::DeleteOutfit => {
                if let Some(name) = self.selected_outfit.clone() {
                    match self.store.delete(&name) {
                        Ok(0) => {}
                        Ok(removed) => {
                            self.outfit_names = self.store.list_names();
                            self.selected_outfit = self.outfit_names.first().cloned();
                            self.status = format!("Deleted {removed} outfit(s) named '{name}'");
                        }
                        Err(err) => {
                            eprintln!("⚠️  Delete failed: {err}");
                            self.status = format!("Delete failed: {err}");
                        }
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let top_row = row![
            self.slot_view(Category::Jacket),
            self.slot_view(Category::Shirt),
            self.slot_view(Category::Accessory),
        ]
        .spacing(20);

        let content = column![
            top_row,
            self.slot_view(Category::Pants),
            self.slot_view(Category::Shoes),
            self.controls_view(),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// One category slot: header with add/remove, then the image strip
    /// with prev/next arrows when the slot is active.
    fn slot_view(&self, category: Category) -> Element<Message> {
        let active = self.slots.index(category).is_some();

        let header = if active {
            row![
                text(category.label()).size(16),
                button("x").on_press(Message::RemoveSlot(category)),
            ]
        } else {
            row![
                text(category.label()).size(16),
                button("+").on_press(Message::AddSlot(category)),
            ]
        }
        .spacing(8)
        .align_y(Alignment::Center);

        let mut slot = column![header].spacing(8).align_x(Alignment::Center);

        if active {
            let display: Element<Message> = match self.slots.current(category, &self.catalog) {
                Some(garment) => image(garment.handle.clone())
                    .width(DISPLAY_SIZE as f32)
                    .height(DISPLAY_SIZE as f32)
                    .into(),
                None => text("(empty)").into(),
            };

            slot = slot.push(
                row![
                    button("<").on_press(Message::Navigate(category, Direction::Backward)),
                    display,
                    button(">").on_press(Message::Navigate(category, Direction::Forward)),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            );
        }

        container(slot).width(240).padding(10).into()
    }

    /// Save field, outfit selector with load/delete, and folder controls.
    fn controls_view(&self) -> Element<Message> {
        let save_row = row![
            text_input("Outfit name", &self.name_input)
                .on_input(Message::NameChanged)
                .width(200),
            button("Save outfit").on_press(Message::SaveOutfit).padding(10),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let library_row = row![
            pick_list(
                self.outfit_names.clone(),
                self.selected_outfit.clone(),
                Message::OutfitPicked,
            )
            .placeholder("Saved outfits")
            .width(220),
            button("Show").on_press(Message::LoadOutfit).padding(10),
            button("Delete").on_press(Message::DeleteOutfit).padding(10),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let folder_row = row![
            button("Choose Wardrobe...")
                .on_press(Message::ChooseWardrobe)
                .padding(10),
            button("Rescan").on_press(Message::Rescan).padding(10),
        ]
        .spacing(8);

        column![save_row, library_row, folder_row]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Outfit Studio",
        OutfitStudio::update,
        OutfitStudio::view,
    )
    .theme(OutfitStudio::theme)
    .centered()
    .run_with(OutfitStudio::new)
}

/// Scan the wardrobe folder in a background thread to keep the UI
/// responsive during image decoding.
async fn scan_wardrobe_async(dir: PathBuf) -> ScanOutcome {
    tokio::task::spawn_blocking(move || catalog::scan(&dir))
        .await
        .unwrap_or_default()
}

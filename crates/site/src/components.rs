//! Reusable shell components shared by the pages.

mod file_card;
mod file_list;
mod sidebar;
mod toolbar;
mod uploader;

pub(crate) use file_list::FileGrid;
pub(crate) use sidebar::Sidebar;
pub(crate) use toolbar::{SortOrderToggle, ViewModeToggle};
pub(crate) use uploader::{DropZone, DropZoneVariant};

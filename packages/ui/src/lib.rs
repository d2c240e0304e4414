//! This crate contains the shared client UI: the per-row edit state
//! machine, the mutation dispatcher, and the grid components.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod rows;
pub use rows::{Mutation, Row, RowEvent, RowId, RowMode, RowSet};

mod dispatch;
pub use dispatch::{dispatch_event, refresh};

mod banner;
pub use banner::{use_error_banner, ErrorBanner, ErrorBannerState};

mod grid;
pub use grid::{EditToolbar, ItemGrid};

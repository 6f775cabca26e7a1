//! UI Components
//!
//! Reusable Leptos components.

mod loading;
mod product_skeleton;
mod edit_actions;
mod nav_bar;
mod entity_list;

pub use loading::{ErrorMessage, LoadingMessage, PendingOverlay};
pub use product_skeleton::{ProductSkeleton, SKELETON_COUNT};
pub use edit_actions::EditActions;
pub use nav_bar::NavBar;
pub use entity_list::{EntityList, ListRow};

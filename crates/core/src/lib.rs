pub mod config;
pub mod error;
pub mod layout;
pub mod svg;
pub mod text;
pub mod timeline;
pub mod trip;
pub mod views;

pub use config::SheetConfig;
pub use error::{LayoutError, RenderError};
pub use layout::{GridLayout, SheetLayout, layout_grid};
pub use timeline::{build_path, compute_totals, render};
pub use views::log_sheet::SheetOptions;

pub mod color;
pub mod config;
pub mod dataset;
pub mod interaction;
pub mod registry;
pub mod style;
pub mod types;
pub mod view;

pub use color::*;
pub use config::AppConfig;
pub use dataset::Dataset;
pub use interaction::*;
pub use registry::{LayerId, LayerRegistry, OverlayEntry};
pub use style::*;
pub use types::*;
pub use view::*;

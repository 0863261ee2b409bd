pub mod client;
pub mod decode;
pub mod download;
pub mod error;
pub mod pipeline;

pub use client::CoverageClient;
pub use download::download_file;
pub use error::{CoverageError, Result};
pub use pipeline::{spawn_loaders, LayerEvent};

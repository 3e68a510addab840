pub mod build;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod site;

pub use build::{build_site, BuildOptions, BuildReport};
pub use catalogue::Catalogue;
pub use config::FolioConfig;
pub use error::{FolioError, Result};
pub use model::{Project, Publication};
pub use page::Page;
pub use site::Site;

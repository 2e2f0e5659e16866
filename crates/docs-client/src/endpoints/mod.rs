// Services over the two upstream documentation files

pub mod content;
pub mod toc;

pub use content::ContentService;
pub use toc::TocService;

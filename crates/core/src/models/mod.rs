pub mod content;
pub mod sections;

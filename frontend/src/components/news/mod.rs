pub mod article;
pub mod content;
pub mod editor;
pub mod list;

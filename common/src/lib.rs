//! Types and client-side logic shared by the site frontend: API models, the
//! banner carousel engine and the inline-image content format used by news
//! articles.

pub mod carousel;
pub mod content;
pub mod model;
pub mod requests;

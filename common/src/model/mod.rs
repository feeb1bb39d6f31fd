pub mod company;
pub mod news;
pub mod upload;

pub mod banners;
pub mod carousel;
pub mod company;
pub mod helpers;
pub mod home;
pub mod news;

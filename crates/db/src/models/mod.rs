pub mod developer;
pub mod event;
pub mod gallery_image;
pub mod project;
pub mod user;

pub mod app;
pub mod empty_gallery;
pub mod gallery;
pub mod gallery_item;
pub mod lightbox;
pub mod zoom_controls;

pub use app::{App, AppProps};

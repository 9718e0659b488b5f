pub mod gallery;
pub mod lightbox;
pub mod zoom;

pub use gallery::{GalleryAction, GalleryState};
pub use lightbox::{LightboxAction, LightboxState};

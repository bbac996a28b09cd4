pub mod common;
pub mod icon;
pub mod landing;
pub mod pages;

pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage, RegisterPage};

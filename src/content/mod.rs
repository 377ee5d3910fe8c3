//! Content module - post and update records and their loading

pub mod loader;
mod post;

pub use loader::ContentLoader;
pub use post::{Author, AuthorSocial, BlogData, BusinessUpdate, Post, UpdatesData};

mod error;
mod image;
mod render;

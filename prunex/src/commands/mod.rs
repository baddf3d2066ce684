pub mod configure;
pub mod image;

pub mod default_image;
pub mod extensions;
pub mod loader;

pub use default_image::*;
pub use extensions::*;
pub use loader::*;

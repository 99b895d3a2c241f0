pub mod image;
pub mod payload;
pub mod request;
pub mod response;

pub use image::*;
pub use payload::*;
pub use request::*;
pub use response::*;

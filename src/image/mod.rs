pub mod frame;
pub mod io;
pub mod rgb8;
pub mod traits;

pub use self::frame::{FrameF32, Pixel3, CHANNELS};
pub use self::rgb8::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows};

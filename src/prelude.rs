pub use crate::detect::{detect, detect_default, DEFAULT_THRESHOLD};
pub use crate::enhance::enhance;
pub use crate::error::{CleanError, Result};
pub use crate::imagebuffer::ImageBuffer;
pub use crate::mask::Mask;
pub use crate::repair::repair;

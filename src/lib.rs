pub mod detect;
pub mod enhance;
pub mod error;
pub mod imagebuffer;
pub mod mask;
pub mod neighborhood;
pub mod prelude;
pub mod repair;
pub mod stats;

pub use crate::detect::{detect, DEFAULT_THRESHOLD};
pub use crate::repair::repair;

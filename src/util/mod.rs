mod error;
mod html;
mod serde;

pub use self::serde::*;
pub use error::*;
pub use html::*;

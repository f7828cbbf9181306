pub mod errors;
pub mod types;

pub use errors::{ConfigError, LedgeError, PlatformError};
pub use types::{Display, Rect, SurfaceId};

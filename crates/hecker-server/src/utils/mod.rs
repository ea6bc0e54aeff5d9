pub mod clock;
pub mod error;

pub use clock::display_time;
pub use error::ApiError;

pub mod error;
pub mod utils;

pub use error::{DocError, Result, ResultExt};
pub use utils::log_filter_error;

pub mod error;
pub mod results;
pub mod state;
pub mod typebots;
pub mod webhook_blocks;

pub use error::ApiError;
pub use state::AppState;

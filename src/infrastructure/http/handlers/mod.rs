//! HTTP Handlers

mod ping;
mod session;
mod task;

pub use ping::*;
pub use session::*;
pub use task::*;

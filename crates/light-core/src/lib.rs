pub mod color;
pub mod config;
pub mod constants;
pub mod gesture;
pub mod inhibit;
pub mod session;
pub mod state;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use gesture::*;
pub use inhibit::*;
pub use session::*;
pub use state::*;

pub mod config;
pub mod constants;
pub mod control;
pub mod engine;
pub mod ghost;
pub mod input;
pub mod scale;
pub mod scope;
pub mod session;

pub use config::*;
pub use control::*;
pub use engine::*;
pub use ghost::*;
pub use input::*;
pub use scale::*;
pub use scope::*;
pub use session::*;

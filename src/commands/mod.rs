pub mod config;
pub mod favorite;
pub mod favorites;
pub mod list;
pub mod open;
pub mod remove;
pub mod rename;

pub use config::*;
pub use favorite::*;
pub use favorites::*;
pub use list::*;
pub use open::*;
pub use remove::*;
pub use rename::*;

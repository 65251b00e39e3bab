mod ai;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod layout;
mod logging;
mod ship;
mod snapshot;
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use layout::*;
pub use logging::init_logging;
pub use ship::*;
pub use snapshot::*;
pub use ui::*;

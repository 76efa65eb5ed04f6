//! Deterministic Pong table simulation
//!
//! One [`Table`] owns the ball, both paddles and the score. The host calls
//! [`Table::tick`] once per display refresh with the current mouse y and
//! renders whatever the entities expose.

pub mod ball;
pub mod collision;
pub mod config;
pub mod control;
pub mod geometry;
pub mod paddle;
pub mod params;
pub mod playfield;
pub mod resources;
pub mod score;
pub mod table;

pub use ball::*;
pub use collision::*;
pub use config::*;
pub use control::*;
pub use geometry::*;
pub use paddle::*;
pub use params::*;
pub use playfield::*;
pub use resources::*;
pub use score::*;
pub use table::*;

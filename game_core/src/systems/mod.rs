pub mod collision;
pub mod gc;
pub mod movement;
pub mod scoring;
pub mod spawn;

pub use collision::*;
pub use gc::*;
pub use movement::*;
pub use scoring::*;
pub use spawn::*;

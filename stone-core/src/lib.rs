pub mod content_pool;
pub mod day;
pub mod play_gate;
pub mod round;
pub mod schedule;

// Re-export main components
pub use content_pool::*;
pub use day::*;
pub use play_gate::*;
pub use round::*;
pub use schedule::*;

pub mod driver;
pub mod layout;
pub mod state;

pub use driver::{Driver, ScheduledTask, Surface, Ticket};
pub use layout::{LayoutError, Point, RingLayout};
pub use state::{ChaseState, Direction, Step};

pub const DOT_COUNT: usize = 12;
pub const RING_RADIUS: f64 = 240.0;
pub const DOT_RADIUS: f64 = 28.0;
pub const TICK_MS: u64 = 90; // lower = faster
pub const MIN_TICK_MS: u64 = 5;
pub const MAX_TICK_MS: u64 = 1000;

pub mod model;
pub mod view;

pub use model::{CrossStyle, Scene};
pub use view::draw;

pub const INSTRUCTIONS: &str = "Stare at the cross. Space: pause/resume. Esc: quit.";
pub const INSTRUCTIONS_MARGIN: f64 = 20.0;
pub const INSTRUCTIONS_FONT_SIZE: f64 = 12.0;

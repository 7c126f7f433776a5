pub mod app;
pub mod canvas;
pub mod surface;
pub mod theme;

use crate::chase::Point;

pub const CANVAS_WIDTH: i32 = 700;
pub const CANVAS_HEIGHT: i32 = 700;
pub const CONTROLS_WIDTH: i32 = 200;
pub const WINDOW_WIDTH: i32 = CANVAS_WIDTH + CONTROLS_WIDTH;
pub const WINDOW_HEIGHT: i32 = CANVAS_HEIGHT;
pub const APP_ID: &str = "org.troia.lilac";

pub fn canvas_center() -> Point {
    Point::new(CANVAS_WIDTH as f64 / 2.0, CANVAS_HEIGHT as f64 / 2.0)
}

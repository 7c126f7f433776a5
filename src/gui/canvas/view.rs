use super::model::{CrossStyle, Scene};
use super::{INSTRUCTIONS, INSTRUCTIONS_FONT_SIZE, INSTRUCTIONS_MARGIN};
use crate::chase::Point;
use crate::gui::theme::{self, INSTRUCTIONS_COLOR};
use cairo::Context;
use palette::Srgb;
use std::f64::consts::PI;

fn set_source(cr: &Context, color: Srgb<u8>) {
    let (r, g, b) = theme::to_cairo(color);
    cr.set_source_rgb(r, g, b);
}

fn draw_background(cr: &Context, scene: &Scene) -> Result<(), cairo::Error> {
    set_source(cr, scene.background);
    cr.paint()
}

fn draw_dots(cr: &Context, scene: &Scene) -> Result<(), cairo::Error> {
    set_source(cr, scene.dot_color);
    for (i, pos) in scene.layout.positions().iter().enumerate() {
        if !scene.is_visible(i) {
            continue;
        }
        cr.new_sub_path();
        cr.arc(pos.x, pos.y, scene.dot_radius, 0.0, 2.0 * PI);
    }
    cr.fill()
}

// drawn after the dots so it stays on top
fn draw_cross(cr: &Context, center: Point, cross: &CrossStyle) -> Result<(), cairo::Error> {
    set_source(cr, cross.color);
    cr.set_line_width(cross.width);
    cr.move_to(center.x - cross.arm, center.y);
    cr.line_to(center.x + cross.arm, center.y);
    cr.move_to(center.x, center.y - cross.arm);
    cr.line_to(center.x, center.y + cross.arm);
    cr.stroke()
}

fn draw_instructions(cr: &Context, center: Point, height: f64) -> Result<(), cairo::Error> {
    set_source(cr, INSTRUCTIONS_COLOR);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(INSTRUCTIONS_FONT_SIZE);
    if let Ok(ext) = cr.text_extents(INSTRUCTIONS) {
        cr.move_to(
            center.x - ext.width() / 2.0,
            height - INSTRUCTIONS_MARGIN + ext.height() / 2.0,
        );
        cr.show_text(INSTRUCTIONS)?;
    }
    Ok(())
}

pub fn draw(cr: &Context, scene: &Scene, height: f64) -> Result<(), cairo::Error> {
    let center = scene.layout.center();

    draw_background(cr, scene)?;
    draw_dots(cr, scene)?;
    draw_cross(cr, center, &scene.cross)?;
    if scene.show_instructions {
        draw_instructions(cr, center, height)?;
    }
    Ok(())
}

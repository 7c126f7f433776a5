use crate::chase::{Surface, Ticket};
use crate::gui::app::AppMsg;
use crate::gui::canvas::Scene;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgb;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Drives the drawing area and glib timers on behalf of the chase driver.
/// Elapsed timers come back as `AppMsg::Tick` so they queue behind user input
/// on the component's message loop.
pub struct GtkSurface {
    scene: Rc<RefCell<Scene>>,
    drawing_area: gtk::DrawingArea,
    window: gtk::ApplicationWindow,
    sender: relm4::Sender<AppMsg>,
}

impl GtkSurface {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        drawing_area: gtk::DrawingArea,
        window: gtk::ApplicationWindow,
        sender: relm4::Sender<AppMsg>,
    ) -> Self {
        Self {
            scene,
            drawing_area,
            window,
            sender,
        }
    }

    pub fn update_scene(&self, f: impl FnOnce(&mut Scene)) {
        f(&mut self.scene.borrow_mut());
        self.drawing_area.queue_draw();
    }
}

impl Surface for GtkSurface {
    type Task = glib::SourceId;

    fn reveal(&mut self, index: usize) {
        self.update_scene(|scene| scene.set_visible(index, true));
    }

    fn hide(&mut self, index: usize) {
        self.update_scene(|scene| scene.set_visible(index, false));
    }

    fn set_dot_color(&mut self, color: Srgb<u8>) {
        self.update_scene(|scene| scene.dot_color = color);
    }

    fn set_background_color(&mut self, color: Srgb<u8>) {
        self.update_scene(|scene| scene.background = color);
    }

    fn schedule(&mut self, delay: Duration, ticket: Ticket) -> glib::SourceId {
        let sender = self.sender.clone();
        glib::timeout_add_local_once(delay, move || {
            if sender.send(AppMsg::Tick(ticket)).is_err() {
                log::debug!("Tick {} dropped, component is gone", ticket);
            }
        })
    }

    fn cancel(&mut self, task: glib::SourceId) {
        // `SourceId::remove` panics on a source that already fired
        if let Some(source) = glib::MainContext::default().find_source_by_id(&task) {
            source.destroy();
        }
    }

    fn close(&mut self) {
        self.window.destroy();
    }
}

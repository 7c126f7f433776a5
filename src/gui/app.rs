use crate::chase::{ChaseState, Driver, MAX_TICK_MS, MIN_TICK_MS, RingLayout, Ticket};
use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::canvas::{self, Scene};
use crate::gui::surface::GtkSurface;
use crate::gui::theme::{self, BackgroundColor, DotColor};
use crate::gui::{CANVAS_HEIGHT, CANVAS_WIDTH, CONTROLS_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use strum::IntoEnumIterator;

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    pub layout: RingLayout,
    pub start_paused: bool,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub driver: Driver<GtkSurface>,
    pub config_path: PathBuf,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick(Ticket),
    TogglePause,
    Pause,
    Resume,
    ToggleDirection,
    SetSpeed(u64),
    Faster,
    Slower,
    DotColor(DotColor),
    Background(BackgroundColor),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::TogglePause => AppMsg::TogglePause,
            AppEvent::Pause => AppMsg::Pause,
            AppEvent::Resume => AppMsg::Resume,
            AppEvent::Reverse => AppMsg::ToggleDirection,
            AppEvent::Faster => AppMsg::Faster,
            AppEvent::Slower => AppMsg::Slower,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

impl AppModel {
    fn apply_config(&mut self, cfg: &Config) {
        self.driver.set_tick_interval(cfg.tick_ms);
        self.driver.set_direction(cfg.direction);
        self.driver
            .surface()
            .update_scene(|scene| scene.restyle(cfg));
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Lilac Chaser with Controls"),
            set_resizable: false,
            set_default_size: (WINDOW_WIDTH, WINDOW_HEIGHT),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::space {
                        sender.input(AppMsg::TogglePause);
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            connect_close_request[sender] => move |_| {
                sender.input(AppMsg::Quit);
                glib::Propagation::Stop
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,

                #[local_ref]
                drawing_area -> gtk::DrawingArea {
                    set_content_width: CANVAS_WIDTH,
                    set_content_height: CANVAS_HEIGHT,
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_width_request: CONTROLS_WIDTH,
                    set_spacing: 5,
                    add_css_class: "lilac-controls",

                    gtk::Label {
                        set_label: "Speed",
                    },

                    gtk::Scale::with_range(
                        gtk::Orientation::Horizontal,
                        MIN_TICK_MS as f64,
                        MAX_TICK_MS as f64,
                        1.0,
                    ) {
                        set_digits: 0,
                        set_draw_value: true,
                        #[watch]
                        set_value: model.driver.state().tick_ms() as f64,
                        connect_value_changed[sender] => move |scale| {
                            sender.input(AppMsg::SetSpeed(scale.value().round() as u64));
                        },
                    },

                    gtk::Label {
                        set_label: "Direction",
                    },

                    gtk::Button {
                        #[watch]
                        set_label: &model.driver.state().direction().to_string(),
                        connect_clicked => AppMsg::ToggleDirection,
                    },

                    gtk::Button {
                        #[watch]
                        set_label: if model.driver.state().is_running() { "Pause" } else { "Resume" },
                        connect_clicked => AppMsg::TogglePause,
                    },

                    gtk::Label {
                        set_label: "Dot Color",
                    },

                    #[name = "dot_colors"]
                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 2,
                    },

                    gtk::Label {
                        set_label: "Background",
                    },

                    #[name = "backgrounds"]
                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 2,
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            layout,
            start_paused,
            events,
        } = init;

        theme::load_css();

        let mut state = ChaseState::new(&layout);
        state.set_tick_interval(config.tick_ms);
        state.set_direction(config.direction);
        if start_paused {
            state.pause();
        }

        let scene = Rc::new(RefCell::new(Scene::new(layout, &config)));
        let drawing_area = gtk::DrawingArea::default();

        let scene_draw = scene.clone();
        drawing_area.set_draw_func(move |_, cr, _, height| {
            if let Err(e) = canvas::draw(cr, &scene_draw.borrow(), height as f64) {
                log::error!("Drawing error: {}", e);
            }
        });

        let surface = GtkSurface::new(
            scene,
            drawing_area.clone(),
            root.clone(),
            sender.input_sender().clone(),
        );
        let mut driver = Driver::new(state, surface);
        driver.start();

        let model = AppModel {
            driver,
            config_path,
        };

        let drawing_area = &drawing_area;
        let widgets = view_output!();

        for color in DotColor::iter() {
            let button = gtk::Button::with_label(&color.to_string());
            button.add_css_class(&theme::swatch_class(color));
            let sender = sender.clone();
            button.connect_clicked(move |_| sender.input(AppMsg::DotColor(color)));
            widgets.dot_colors.append(&button);
        }

        for color in BackgroundColor::iter() {
            let button = gtk::Button::with_label(&color.to_string());
            let sender = sender.clone();
            button.connect_clicked(move |_| sender.input(AppMsg::Background(color)));
            widgets.backgrounds.append(&button);
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        log::info!(
            "Chasing {} dots every {} ms",
            model.driver.state().dot_count(),
            model.driver.state().tick_ms()
        );

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick(ticket) => self.driver.on_tick(ticket),
            AppMsg::TogglePause => self.driver.toggle_pause(),
            AppMsg::Pause => self.driver.pause(),
            AppMsg::Resume => self.driver.resume(),
            AppMsg::ToggleDirection => {
                let direction = self.driver.toggle_direction();
                log::info!("Direction: {}", direction);
            }
            AppMsg::SetSpeed(ms) => {
                self.driver.set_tick_interval(ms);
            }
            AppMsg::Faster => {
                let ms = self.driver.state().tick_ms() / 2;
                self.driver.set_tick_interval(ms);
            }
            AppMsg::Slower => {
                let ms = self.driver.state().tick_ms().saturating_mul(2);
                self.driver.set_tick_interval(ms);
            }
            AppMsg::DotColor(color) => self.driver.set_dot_color(color.rgb()),
            AppMsg::Background(color) => self.driver.set_background_color(color.rgb()),
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.apply_config(&new_config);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => {
                log::info!("Shutting down");
                self.driver.shutdown();
            }
        }
    }
}

use crate::chase::RingLayout;
use crate::config::Config;
use palette::Srgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossStyle {
    pub color: Srgb<u8>,
    pub arm: f64,
    pub width: f64,
}

impl CrossStyle {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            color: *cfg.cross_color,
            arm: cfg.cross_arm,
            width: cfg.cross_width,
        }
    }
}

/// Everything the draw function needs. Dot geometry is computed once by the
/// layout; frames only flip visibility flags and colors.
#[derive(Debug, Clone)]
pub struct Scene {
    pub layout: RingLayout,
    pub visible: Vec<bool>,
    pub dot_radius: f64,
    pub dot_color: Srgb<u8>,
    pub background: Srgb<u8>,
    pub cross: CrossStyle,
    pub show_instructions: bool,
}

impl Scene {
    pub fn new(layout: RingLayout, cfg: &Config) -> Self {
        let visible = vec![true; layout.dot_count()];
        Self {
            layout,
            visible,
            dot_radius: cfg.dot_radius,
            dot_color: cfg.dot_color.rgb(),
            background: cfg.background_color.rgb(),
            cross: CrossStyle::from_config(cfg),
            show_instructions: cfg.show_instructions,
        }
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        let len = self.visible.len();
        self.visible[index % len] = visible;
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible[index % self.visible.len()]
    }

    pub fn hidden_count(&self) -> usize {
        self.visible.iter().filter(|v| !**v).count()
    }

    /// Style settings that can change while running. Geometry stays fixed.
    pub fn restyle(&mut self, cfg: &Config) {
        self.dot_color = cfg.dot_color.rgb();
        self.background = cfg.background_color.rgb();
        self.cross = CrossStyle::from_config(cfg);
        self.show_instructions = cfg.show_instructions;
    }
}

use derive_more::{Deref, From, Into};
use gtk::gdk;
use gtk4 as gtk;
use palette::Srgb;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const CONTROLS_BG: &str = "#f0f0f0";
pub const INSTRUCTIONS_COLOR: Srgb<u8> = Srgb::new(0, 0, 0);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum DotColor {
    #[default]
    Lilac,
    Red,
    Blue,
    Green,
}

impl DotColor {
    pub fn rgb(self) -> Srgb<u8> {
        match self {
            Self::Lilac => Srgb::new(0xC8, 0xA2, 0xC8),
            Self::Red => Srgb::new(0xFF, 0x6B, 0x6B),
            Self::Blue => Srgb::new(0x21, 0x96, 0xF3),
            Self::Green => Srgb::new(0x4C, 0xAF, 0x50),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum BackgroundColor {
    #[default]
    Gray,
    White,
    Black,
    #[strum(to_string = "Dark Gray", serialize = "darkgray", serialize = "dark-gray")]
    DarkGray,
}

impl BackgroundColor {
    pub fn rgb(self) -> Srgb<u8> {
        match self {
            Self::Gray => Srgb::new(0x80, 0x80, 0x80),
            Self::White => Srgb::new(0xFF, 0xFF, 0xFF),
            Self::Black => Srgb::new(0x00, 0x00, 0x00),
            Self::DarkGray => Srgb::new(0x40, 0x40, 0x40),
        }
    }
}

/// A `#rrggbb` color as written in the config file.
#[derive(
    Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr,
)]
pub struct HexColor(Srgb<u8>);

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Srgb<u8>>().map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&css_hex(self.0))
    }
}

pub fn css_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

pub fn to_cairo(color: Srgb<u8>) -> (f64, f64, f64) {
    color.into_format::<f64>().into_components()
}

/// Buttons carry their swatch as a CSS class so the color shows without
/// per-widget providers.
pub fn swatch_class(color: DotColor) -> String {
    format!("swatch-{}", color.to_string().to_lowercase())
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let mut css_data = format!(
        "
.lilac-controls {{
    background-color: {CONTROLS_BG};
    padding: 6px 10px;
}}
"
    );
    for color in <DotColor as strum::IntoEnumIterator>::iter() {
        css_data.push_str(&format!(
            ".{} {{ background: {}; }}\n",
            swatch_class(color),
            css_hex(color.rgb())
        ));
    }
    provider.load_from_data(&css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

//! Colors shared across the UI.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0x4d, 0x4d);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const FIELD_BORDER: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x4e, 0xc9, 0x70);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

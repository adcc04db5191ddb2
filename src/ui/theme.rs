//! Colours shared by the viewer panes

use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,
    pub success: Color,
    pub error: Color,
    /// BASIC and C control keywords
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    /// Arithmetic and comparison operators, C braces and parentheses
    pub operator: Color,
    /// `#include` lines
    pub directive: Color,
    /// `printf`, `scanf` and `main`
    pub function: Color,
    pub type_name: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),
    string: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),
    operator: Color::Rgb(137, 180, 250),
    directive: Color::Rgb(245, 194, 231),
    function: Color::Rgb(249, 226, 175),
    type_name: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};

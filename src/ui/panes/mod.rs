//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: BASIC source with line numbers and keyword highlighting
//! - [`output`]: Generated C, or the compile error when compilation failed
//! - [`status`]: Status bar with compile outcome and keybindings
//!
//! Each pane exports a `render_*` function that draws into a given area and
//! owns no state beyond the scroll offset it is handed.

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered block whose border color reflects focus.
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` so the last page stays full, then return the
/// visible slice of `lines` with a line-number gutter.
fn numbered_window<'a>(
    lines: Vec<Line<'a>>,
    area: Rect,
    scroll_offset: &mut usize,
) -> Vec<Line<'a>> {
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders

    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    lines
        .into_iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

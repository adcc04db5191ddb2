//! Source pane rendering with syntax highlighting
//!
//! Keywords are recognised with the compiler's own keyword table, so the
//! highlighting can never disagree with the lexer about what is a keyword.

use crate::compiler::token::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one line of BASIC source
pub fn highlight_basic_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comment runs to end of line
        if c == '#' {
            spans.push(Span::styled(
                chars[i..].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if c == '"' {
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if c.is_ascii_alphanumeric() {
            let mut end = i + 1;
            while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '.') {
                end += 1;
            }
            let word: String = chars[i..end].iter().collect();
            spans.push(Span::styled(word.clone(), word_style(&word)));
            i = end;
            continue;
        }

        let style = match c {
            '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' => Style::default().fg(DEFAULT_THEME.operator),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    if TokenKind::keyword(word).is_some() {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = super::pane_block(" Source ", is_focused);
    let lines = source_code.lines().map(highlight_basic_line).collect();
    let visible = super::numbered_window(lines, area, scroll_offset);

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

//! Generated C pane

use crate::ui::app::Outcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Highlighting for the small C vocabulary the compiler emits
pub fn highlight_c_line(line: &str) -> Line<'static> {
    if line.starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.directive),
        ));
    }

    let mut spans = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                if chars[end] == '\\' {
                    end += 1;
                }
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

        if c.is_ascii_alphanumeric() || c == '_' {
            let mut end = i + 1;
            while end < chars.len()
                && (chars[end].is_ascii_alphanumeric() || chars[end] == '_' || chars[end] == '.')
            {
                end += 1;
            }
            let word: String = chars[i..end].iter().collect();
            let style = match word.as_str() {
                "int" | "float" | "void" => Style::default().fg(DEFAULT_THEME.type_name),
                "if" | "while" | "goto" | "return" => Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD),
                "printf" | "scanf" | "main" => Style::default().fg(DEFAULT_THEME.function),
                _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
                    Style::default().fg(DEFAULT_THEME.number)
                }
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(word, style));
            i = end;
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.operator),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

/// Render the generated code pane, or the error if compilation failed
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    outcome: &Outcome,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    match outcome {
        Outcome::Compiled { code, .. } => {
            let block = super::pane_block(" Generated C ", is_focused);
            let lines = code.lines().map(highlight_c_line).collect();
            let visible = super::numbered_window(lines, area, scroll_offset);
            frame.render_widget(Paragraph::new(visible).block(block), area);
        }
        Outcome::Failed { message } => {
            *scroll_offset = 0;
            let block = super::pane_block(" Generated C (failed) ", is_focused);
            let paragraph = Paragraph::new(message.as_str())
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.error))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

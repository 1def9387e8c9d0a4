use crate::app::{AppMode, RenderState};
use crate::pacing::FocusSplit;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

/// Terminal column the pivot glyph sits on, so the eye never has to move
/// between ticks.
const PIVOT_COLUMN: usize = 18;

/// A single token with its pivot highlighted and pinned to [`PIVOT_COLUMN`].
pub fn render_word_display(split: &FocusSplit) -> Paragraph<'static> {
    let palette = Palette::active();
    let left_padding = PIVOT_COLUMN.saturating_sub(split.prefix.width());

    let spans = vec![
        Span::raw(" ".repeat(left_padding)),
        Span::styled(split.prefix.clone(), Style::default().fg(palette.text)),
        Span::styled(
            split.pivot.clone(),
            Style::default()
                .fg(palette.pivot)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(split.suffix.clone(), Style::default().fg(palette.text)),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(palette.background))
}

/// A multi-token chunk as plain centered text.
pub fn render_chunk_display(text: &str) -> Paragraph<'static> {
    let palette = Palette::active();
    Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.text).bg(palette.background))
}

pub fn render_progress_bar(progress: f64) -> Line<'static> {
    let palette = Palette::active();
    let filled_len = (progress.clamp(0.0, 1.0) * 20.0) as usize;
    let empty_len = 20 - filled_len;

    let mut spans = Vec::new();
    for _ in 0..filled_len {
        spans.push(Span::styled("─", Style::default().fg(palette.text)));
    }
    for _ in 0..empty_len {
        spans.push(Span::styled("─", Style::default().fg(palette.dimmed)));
    }

    Line::from(spans).alignment(Alignment::Center)
}

/// Text shown when no chunk is on screen.
pub fn placeholder_text(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Finished => "Done. Press space to read again",
        _ => "Ready",
    }
}

/// The idle placeholder, or the restart prompt once the stream has finished.
pub fn render_placeholder(mode: AppMode) -> Paragraph<'static> {
    let palette = Palette::active();
    Paragraph::new(placeholder_text(mode))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.dimmed).bg(palette.background))
}

/// Bottom status line: current rate, chunk size, and the mode's key hints.
pub fn render_status_line(state: &RenderState) -> Line<'static> {
    let palette = Palette::active();
    let summary = format!(
        " {} wpm · chunk {} · {} ",
        state.rate,
        state.chunk_size,
        state.status_hint()
    );
    Line::from(Span::styled(summary, Style::default().fg(palette.dimmed)))
        .alignment(Alignment::Center)
}

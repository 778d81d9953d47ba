//! Frame drawing.
//!
//! Widget construction is split into pure helpers so the text of every
//! region can be asserted without a terminal. Backend-provided text is
//! always rendered through raw spans; nothing here interprets markup.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::submit::{Outcome, LOADING_TEXT, SUMMARY_HEADING};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::FormState;
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::theme::{ACCENT, DIM_TEXT, FIELD_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const IDLE_HINT: &str = "Paste a YouTube URL and press Enter.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Footer::new().widget(footer), footer);

    let form = app.form();
    let (input_area, submit_area, result_area) = form_regions(body);
    draw_input(frame, form, input_area);
    frame.render_widget(Paragraph::new(submit_line(form)), submit_area);
    draw_result(frame, form, result_area);
}

fn draw_input(frame: &mut Frame<'_>, form: &FormState, area: Rect) {
    let visible = area.width.saturating_sub(2) as usize;
    let scroll = if visible == 0 {
        0
    } else {
        form.cursor.saturating_sub(visible - 1)
    };

    let paragraph = Paragraph::new(form.input.clone())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FIELD_BORDER))
                .title(" YouTube URL "),
        );
    frame.render_widget(paragraph, area);

    if visible > 0 {
        let x = area.x + 1 + (form.cursor - scroll) as u16;
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// The submit control: a button when idle, a spinner while busy.
fn submit_line(form: &FormState) -> Line<'static> {
    if form.busy {
        let spinner = SPINNER_FRAMES[form.animation_tick as usize % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!(" {spinner} "), Style::default().fg(STATUS_OK)),
            Span::styled(
                form.submit_label().to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                format!(" [ {} ]", form.submit_label()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  press Enter", Style::default().fg(DIM_TEXT)),
        ])
    }
}

/// Text of the display region for the current outcome.
fn result_lines(form: &FormState) -> Vec<Line<'static>> {
    match &form.outcome {
        None => vec![Line::from(Span::styled(
            IDLE_HINT,
            Style::default().fg(DIM_TEXT),
        ))],
        Some(Outcome::Pending) => vec![Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(DIM_TEXT),
        ))],
        Some(Outcome::Summary(text)) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    SUMMARY_HEADING,
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
            ];
            for row in text.lines() {
                lines.push(Line::from(Span::raw(row.to_string())));
            }
            lines
        }
        Some(outcome @ Outcome::Error { .. }) => {
            let message = outcome.error_line().unwrap_or_default();
            vec![Line::from(Span::styled(
                message,
                Style::default().fg(STATUS_ERROR),
            ))]
        }
    }
}

fn draw_result(frame: &mut Frame<'_>, form: &FormState, area: Rect) {
    let paragraph = Paragraph::new(result_lines(form))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FIELD_BORDER))
                .title(" Summary "),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::{FormIntent, FormReducer};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn form_with(outcome: Option<Outcome>) -> FormState {
        FormState {
            outcome,
            ..FormState::default()
        }
    }

    #[test]
    fn idle_submit_line_shows_the_button() {
        let text = line_text(&submit_line(&FormState::default()));
        assert!(text.contains("[ Summarize ]"));
        assert!(!text.contains("Summarizing"));
    }

    #[test]
    fn busy_submit_line_shows_spinner_and_progress_label() {
        let mut form = FormState::default();
        form.busy = true;
        let text = line_text(&submit_line(&form));
        assert!(text.contains("Summarizing…"));
        assert!(!text.contains("[ Summarize ]"));
    }

    #[test]
    fn spinner_advances_with_the_animation_tick() {
        let mut form = FormState::default();
        form.busy = true;
        let first = line_text(&submit_line(&form));
        form = FormReducer::reduce(form, FormIntent::Tick);
        let second = line_text(&submit_line(&form));
        assert_ne!(first, second);
    }

    #[test]
    fn empty_region_shows_the_idle_hint() {
        let lines = result_lines(&form_with(None));
        assert_eq!(line_text(&lines[0]), IDLE_HINT);
    }

    #[test]
    fn pending_shows_the_loading_placeholder() {
        let lines = result_lines(&form_with(Some(Outcome::Pending)));
        assert_eq!(line_text(&lines[0]), "Loading summary...");
    }

    #[test]
    fn summaries_render_under_the_heading() {
        let lines = result_lines(&form_with(Some(Outcome::Summary(
            "First line.\nSecond line.".to_string(),
        ))));
        assert_eq!(line_text(&lines[0]), "Video Summary");
        assert_eq!(line_text(&lines[1]), "");
        assert_eq!(line_text(&lines[2]), "First line.");
        assert_eq!(line_text(&lines[3]), "Second line.");
    }

    #[test]
    fn errors_render_with_their_prefix() {
        let lines = result_lines(&form_with(Some(Outcome::application("Invalid YouTube URL"))));
        assert_eq!(line_text(&lines[0]), "Error: Invalid YouTube URL");

        let lines = result_lines(&form_with(Some(Outcome::network("connection refused"))));
        assert_eq!(line_text(&lines[0]), "Network Error: connection refused");
    }

    #[test]
    fn backend_markup_stays_literal() {
        let hostile = "<img src=x onerror=alert(1)>";
        let lines = result_lines(&form_with(Some(Outcome::Summary(hostile.to_string()))));
        assert_eq!(line_text(&lines[2]), hostile);

        let lines = result_lines(&form_with(Some(Outcome::application(hostile))));
        assert_eq!(line_text(&lines[0]), format!("Error: {hostile}"));
    }
}

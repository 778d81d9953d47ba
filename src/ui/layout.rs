//! Screen partitioning.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (bands[0], bands[1], bands[2])
}

/// Split the body into the URL field, the submit line and the result pane.
pub fn form_regions(body: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(body);
    (rows[0], rows[1], rows[2])
}

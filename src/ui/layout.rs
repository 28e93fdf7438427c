use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Header | body | footer hint | status bar. Every screen shares this
/// skeleton; the tabbed screens put the tab bar in the header.
pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header / tab bar
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Footer hint
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// A centered column no wider than `max_width`, for the card-style
/// funnel screens.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// A centered popup taking the given percentage of the area.
pub fn centered_popup(area: Rect, percent_w: u16, percent_h: u16) -> Rect {
    let w = (area.width * percent_w / 100).min(area.width.saturating_sub(2));
    let h = (area.height * percent_h / 100).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

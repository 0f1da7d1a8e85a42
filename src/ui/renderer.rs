use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Board, CatColor, CatPart, Cell, Game};
use crate::input::InputState;

const CELL_WIDTH: u16 = 5;
const CELL_STRIDE: u16 = CELL_WIDTH + 1;
const INFO_WIDTH: u16 = 22;

pub fn ui(f: &mut Frame, game: &Game, input: &InputState) {
    let size = f.size();
    let board_area = board_area(size, game.board());

    let info_area = Rect {
        x: board_area.right(),
        y: board_area.y,
        width: INFO_WIDTH.min(size.right().saturating_sub(board_area.right())),
        height: board_area.height,
    };

    render_board(f, game, input, board_area);
    render_info(f, game, info_area);

    if board_area.bottom() < size.bottom() {
        let status_area = Rect {
            x: board_area.x,
            y: board_area.bottom(),
            width: board_area.width + info_area.width,
            height: 1,
        };
        render_status(f, input, status_area);
    }

    if game.is_cleared() {
        render_cleared_overlay(f, game, board_area);
    }
}

/// Screen rectangle of the bordered board for a terminal of `size`. Shared by
/// the renderer and mouse hit-testing so both agree on where columns are.
pub fn board_area(size: Rect, board: &Board) -> Rect {
    let cols = board.cols() as u16;
    let rows = board.rows() as u16;

    // column numbers, cats, cursor marker, borders
    let width = (cols * CELL_STRIDE).saturating_sub(1) + 2;
    let height = rows + 4;

    let total_width = width + INFO_WIDTH;
    Rect {
        x: size.x + size.width.saturating_sub(total_width) / 2,
        y: size.y + size.height.saturating_sub(height + 1) / 2,
        width: width.min(size.width),
        height: height.min(size.height),
    }
}

/// Board column under screen position `(x, y)`, if any.
pub fn column_at(area: Rect, cols: usize, x: u16, y: u16) -> Option<usize> {
    let inner_x = area.x + 1;
    if x < inner_x || y <= area.y || y >= area.bottom().saturating_sub(1) {
        return None;
    }
    let column = ((x - inner_x) / CELL_STRIDE) as usize;
    (column < cols).then_some(column)
}

fn render_board(f: &mut Frame, game: &Game, input: &InputState, area: Rect) {
    let board = game.board();
    let selected = game.selected_cat();
    let mut board_lines = Vec::new();

    let header: Vec<Span> = (0..board.cols())
        .map(|col| {
            let style = if Some(col) == game.selected() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{:^w$} ", col + 1, w = CELL_WIDTH as usize), style)
        })
        .collect();
    board_lines.push(Line::from(header));

    for row in 0..board.rows() {
        let mut line_spans = Vec::new();
        for col in 0..board.cols() {
            let is_selected = matches!(selected, Some((r, c, _)) if r == row && c == col);
            line_spans.push(cell_span(board, row, col, is_selected));
            line_spans.push(Span::raw(" "));
        }
        board_lines.push(Line::from(line_spans));
    }

    let marker: Vec<Span> = (0..board.cols())
        .map(|col| {
            let text = if col == input.cursor { "  ▲   " } else { "      " };
            Span::styled(text, Style::default().fg(Color::Yellow))
        })
        .collect();
    board_lines.push(Line::from(marker));

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("catstack"));

    f.render_widget(board_widget, area);
}

fn cell_span(board: &Board, row: usize, col: usize, is_selected: bool) -> Span<'static> {
    let color = match board.get(row, col) {
        Some(Cell::Cat(color)) => color,
        _ => {
            // Checkerboard for empty cells
            let text = if (row + col) % 2 == 0 { "  ·  " } else { "     " };
            return Span::styled(text, Style::default().fg(Color::DarkGray));
        }
    };

    let text = match board.segment_at(row, col) {
        Some(part) if part.has_face() => "=^.^=",
        Some(CatPart::Tail) => "  ~  ",
        _ => "     ",
    };

    let mut style = Style::default().bg(coat(color)).fg(face_color(color));
    if is_selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(text, style)
}

pub fn coat(color: CatColor) -> Color {
    match color {
        CatColor::White => Color::White,
        CatColor::Black => Color::DarkGray,
        CatColor::Brown => Color::Rgb(139, 90, 43),
        CatColor::Gray => Color::Gray,
        CatColor::Ginger => Color::LightRed,
        CatColor::Calico => Color::LightYellow,
    }
}

fn face_color(color: CatColor) -> Color {
    match color {
        CatColor::Black | CatColor::Brown => Color::White,
        _ => Color::Black,
    }
}

fn render_info(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Stats
            Constraint::Min(1),    // Key help
        ])
        .split(area);

    render_stats(f, game, chunks[0]);
    render_help(f, chunks[1]);
}

fn render_stats(f: &mut Frame, game: &Game, area: Rect) {
    let remaining: Vec<Span> = game
        .colors_remaining()
        .into_iter()
        .map(|color| Span::styled("■ ", Style::default().fg(coat(color))))
        .collect();

    let stats_text = vec![
        Line::from(vec![Span::raw(format!("Moves: {}", game.moves()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Left", Style::default().fg(Color::Cyan))]),
        Line::from(remaining),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::raw("←/→  cursor")]),
        Line::from(vec![Span::raw("spc  pick/drop")]),
        Line::from(vec![Span::raw("1-9  column")]),
        Line::from(vec![Span::raw("esc  cancel")]),
        Line::from(vec![Span::raw("s    shuffle")]),
        Line::from(vec![Span::raw("q    quit")]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(help_widget, area);
}

fn render_status(f: &mut Frame, input: &InputState, area: Rect) {
    let line = match &input.status {
        Some(message) => Line::from(vec![Span::styled(
            message.text.clone(),
            Style::default().fg(message.color),
        )]),
        None => Line::from(vec![Span::raw("")]),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_cleared_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let cleared_text = vec![
        Line::from(vec![Span::styled("GAME CLEAR!", Style::default().fg(Color::Green))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Moves: {}", game.moves()))]),
        Line::from(vec![Span::raw("S to shuffle")]),
    ];

    let cleared_widget = Paragraph::new(cleared_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(cleared_widget, popup_area);
}

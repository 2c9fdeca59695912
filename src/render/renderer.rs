use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, CollisionType, GameStatus, Snapshot};
use crate::metrics::GameMetrics;

/// Draws snapshots into a terminal frame
///
/// Each grid cell takes `cell_size` terminal columns: one glyph followed by
/// padding.
pub struct Renderer {
    cell_size: usize,
}

impl Renderer {
    pub fn new(cell_size: u16) -> Self {
        Self {
            cell_size: usize::from(cell_size.max(1)),
        }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.status {
            GameStatus::Running => frame.render_widget(self.render_grid(snapshot), game_area),
            GameStatus::GameOver | GameStatus::Won => {
                frame.render_widget(self.render_game_end(snapshot, metrics), game_area)
            }
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn glyph(&self, symbol: &str, style: Style) -> Span<'static> {
        let padding = " ".repeat(self.cell_size - 1);
        Span::styled(format!("{symbol}{padding}"), style)
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let body: HashSet<Cell> = snapshot.body.iter().copied().collect();
        let head = snapshot.head();
        let mut lines = Vec::with_capacity(snapshot.grid_height);

        for row in 0..snapshot.grid_height as i32 {
            let spans: Vec<Span> = (0..snapshot.grid_width as i32)
                .map(|col| {
                    let cell = Cell::new(col, row);
                    if Some(cell) == head {
                        self.glyph(
                            "■",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if body.contains(&cell) {
                        self.glyph("□", Style::default().fg(Color::Green))
                    } else if Some(cell) == snapshot.food {
                        self.glyph(
                            "O",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        self.glyph(".", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_end(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'static> {
        let (title, color) = match snapshot.status {
            GameStatus::Won => ("YOU WIN", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };
        let reason = match snapshot.collision {
            Some(CollisionType::Wall) => "Hit the wall",
            Some(CollisionType::SelfCollision) => "Ran into yourself",
            None => "The board is full",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2)
    }
}

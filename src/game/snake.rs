use std::collections::VecDeque;

use super::{action::Direction, grid::Cell};

/// The snake in the game
///
/// Body segments run from tail (front) to head (back). The body never
/// becomes empty: trimming stops at the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Option<Direction>,
    pending: Option<Direction>,
    target_len: usize,
}

impl Snake {
    /// Single-cell snake with no heading, waiting for its first turn
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
            heading: None,
            pending: None,
            target_len: 1,
        }
    }

    /// Snake with an explicit body, ordered tail to head
    ///
    /// Returns `None` for an empty body.
    pub fn from_body(body: Vec<Cell>, heading: Option<Direction>) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        let target_len = body.len();
        Some(Self {
            body: body.into(),
            heading,
            pending: None,
            target_len,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    /// Body cells from tail to head
    pub fn body(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Buffer the heading for the next tick
    ///
    /// A reversal onto the neck is dropped while the snake is longer than one
    /// cell. The last accepted proposal before a tick wins.
    pub fn propose_direction(&mut self, direction: Direction) {
        let reverses = self
            .heading
            .is_some_and(|heading| heading.is_opposite(direction));
        if reverses && self.body.len() > 1 {
            return;
        }
        self.pending = Some(direction);
    }

    /// Promote the buffered heading, if any, to the current heading
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.heading = Some(direction);
        }
    }

    /// Cell the head would enter on the next move, unwrapped
    pub fn next_head(&self) -> Option<Cell> {
        self.heading
            .map(|heading| self.head().moved_in_direction(heading))
    }

    /// Append the next head and return it; the tail stays in place
    pub fn advance(&mut self) -> Option<Cell> {
        let new_head = self.next_head()?;
        self.body.push_back(new_head);
        Some(new_head)
    }

    /// Remove and return the oldest segment
    pub fn trim_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_front()
    }

    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Whether the body is longer than its target and the tail should go
    pub fn needs_trim(&self) -> bool {
        self.body.len() > self.target_len
    }

    /// Whether the tail cell is freed on a move that does or does not eat
    pub fn vacates_tail(&self, eats: bool) -> bool {
        self.body.len() + 1 > self.target_len + usize::from(eats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(len: i32) -> Snake {
        // Tail at (0, 5), head at (len - 1, 5), heading right
        let body = (0..len).map(|col| Cell::new(col, 5)).collect();
        Snake::from_body(body, Some(Direction::Right)).unwrap()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.tail(), Cell::new(5, 5));
        assert_eq!(snake.heading(), None);
        assert_eq!(snake.target_len(), 1);
        assert_eq!(snake.next_head(), None);
    }

    #[test]
    fn test_from_body_orders_tail_to_head() {
        let snake = horizontal(3);
        assert_eq!(snake.tail(), Cell::new(0, 5));
        assert_eq!(snake.head(), Cell::new(2, 5));
        assert_eq!(snake.target_len(), 3);
        assert!(Snake::from_body(Vec::new(), None).is_none());
    }

    #[test]
    fn test_advance_and_trim() {
        let mut snake = horizontal(3);

        assert_eq!(snake.advance(), Some(Cell::new(3, 5)));
        assert_eq!(snake.len(), 4);
        assert!(snake.needs_trim());

        assert_eq!(snake.trim_tail(), Some(Cell::new(0, 5)));
        assert_eq!(snake.len(), 3);
        assert!(!snake.needs_trim());
        assert_eq!(snake.head(), Cell::new(3, 5));
    }

    #[test]
    fn test_grow_skips_trim() {
        let mut snake = horizontal(3);
        snake.advance();
        snake.grow();
        assert!(!snake.needs_trim());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.target_len(), 4);
    }

    #[test]
    fn test_trim_never_removes_head() {
        let mut snake = Snake::new(Cell::new(1, 1));
        assert_eq!(snake.trim_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_reversal_rejected_when_long() {
        let mut snake = horizontal(3);
        snake.propose_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), None);

        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Some(Direction::Right));
    }

    #[test]
    fn test_reversal_allowed_for_single_cell() {
        let mut snake = Snake::from_body(vec![Cell::new(2, 2)], Some(Direction::Right)).unwrap();
        snake.propose_direction(Direction::Left);
        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Some(Direction::Left));
    }

    #[test]
    fn test_last_accepted_proposal_wins() {
        let mut snake = horizontal(3);
        snake.propose_direction(Direction::Up);
        snake.propose_direction(Direction::Down);
        snake.propose_direction(Direction::Left); // reversal, dropped
        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Some(Direction::Down));
        assert_eq!(snake.pending_direction(), None);
    }

    #[test]
    fn test_vacates_tail() {
        let mut snake = horizontal(3);
        assert!(snake.vacates_tail(false));
        assert!(!snake.vacates_tail(true));

        // Growth still pending from a previous meal
        snake.grow();
        assert!(!snake.vacates_tail(false));
    }
}

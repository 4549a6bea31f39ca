use rand::Rng;

use super::board::{Board, BoardSize, Point};
use super::reveal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    pub fn new(size: BoardSize, mine_count: usize, rng: &mut impl Rng) -> Game {
        let mut board = Board::new_from_size(size);
        board.place_mines(mine_count, rng);
        Game::from_board(board)
    }

    pub fn from_board(board: Board) -> Game {
        Game {
            board,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        match self.status {
            GameStatus::InProgress => false,
            _ => true,
        }
    }

    pub fn reveal(&mut self, point: &Point) {
        if !self.board.size.contains(point) {
            return;
        }
        if self.board.retrieve_cell(point).content.is_mine() {
            self.status = GameStatus::Lost;
            return;
        }
        reveal::flood_reveal(&mut self.board, point);
        if self.board.is_won() {
            self.status = GameStatus::Won;
        }
    }

    // the win predicate is only checked after a reveal, never after a mark
    pub fn mark(&mut self, point: &Point) {
        self.board.toggle_mark(point);
    }
}

#[cfg(test)]
#[macro_use]
extern crate proptest;

pub mod board;
pub mod game;
pub mod reveal;
mod interaction;

use rand::thread_rng;

use board::BoardSize;
use game::{Game, GameStatus};

pub fn new_standard_game() -> Game {
    let mine_count = interaction::get_mine_count();
    Game::new(BoardSize::STANDARD, mine_count, &mut thread_rng())
}

pub fn game_loop(game: &mut Game) {
    while !game.is_over() {
        println!("{}", game.board());
        println!("{} mines left to flag", game.board().remaining_mines());
        let turn = interaction::get_turn();
        if turn.mark {
            game.mark(&turn.point);
        } else {
            game.reveal(&turn.point);
        }
    }
    println!("{}", game.board());
    match game.status() {
        GameStatus::Won => println!("every mine is flagged, you win!"),
        GameStatus::Lost => println!("you stepped on a mine, you lose"),
        GameStatus::InProgress => {}
    }
}

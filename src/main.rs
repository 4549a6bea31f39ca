use minefield::{game_loop, new_standard_game};

fn main() {
    let mut game = new_standard_game();
    game_loop(&mut game);
}

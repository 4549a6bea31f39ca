use regex::Regex;
use std::io;

use super::board::Point;

pub struct Turn {
    pub point: Point,
    pub mark: bool,
}

pub fn get_mine_count() -> usize {
    println!("How many mines?");
    loop {
        match mine_count_from_string(&read_line()) {
            Some(count) => return count,
            None => println!("Must be a whole number of mines"),
        }
    }
}

pub fn get_turn() -> Turn {
    println!("Please input your move: COL ROW [mine]");
    loop {
        match turn_from_string(&read_line()) {
            Some(turn) => return turn,
            None => println!("Must be of the form: COL ROW [mine]"),
        }
    }
}

fn read_line() -> String {
    let mut input = String::new();
    io::stdin().read_line(&mut input).expect("Failed to read");
    input
}

fn mine_count_from_string(input: &str) -> Option<usize> {
    let re = Regex::new(r"^\s*(\d+)\s*$").unwrap();
    re.captures(input).and_then(|cap| cap[1].parse().ok())
}

fn turn_from_string(input: &str) -> Option<Turn> {
    let re = Regex::new(r"^\s*(\d+)\s+(\d+)(\s+mine)?\s*$").unwrap();
    let cap = re.captures(input)?;
    let col: usize = cap[1].parse().ok()?;
    let row: usize = cap[2].parse().ok()?;
    // player coordinates are 1-based, 0 has no board counterpart
    let point = Point(col.checked_sub(1)?, row.checked_sub(1)?);
    Some(Turn {
        point,
        mark: cap.get(3).is_some(),
    })
}

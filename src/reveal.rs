use std::collections::HashSet;

use super::board::{Board, Content, Point};

// Iterative flood fill over the zero-hint region around `start`. The pending
// coordinates live in a set rather than on the call stack, so a region
// spanning the whole board cannot exhaust it, and a coordinate enqueued by
// several neighbors is still processed once.
pub fn flood_reveal(board: &mut Board, start: &Point) {
    let mut pending = HashSet::with_capacity(16);
    pending.insert(*start);

    while let Some(point) = take_pending(&mut pending) {
        if !board.size.contains(&point) {
            continue;
        }
        let cell = board.retrieve_cell(&point);
        match cell.content {
            Content::Empty => {
                if !cell.revealed || cell.marked {
                    board.expose(&point);
                    for neighbor in board.neighbor_points(&point) {
                        pending.insert(neighbor);
                    }
                }
            }
            // hint cells form the border of the fill: revealed, not expanded
            Content::Hint(_) => {
                board.expose(&point);
            }
            Content::Mine => {}
        }
    }
}

fn take_pending(pending: &mut HashSet<Point>) -> Option<Point> {
    let point = pending.iter().next().copied()?;
    pending.remove(&point);
    Some(point)
}

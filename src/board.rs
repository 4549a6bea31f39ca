use itertools::iproduct;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Empty,
    Mine,
    Hint(u8),
}

impl Content {
    pub fn is_mine(&self) -> bool {
        match *self {
            Content::Mine => true,
            _ => false,
        }
    }

    fn incremented(&self) -> Content {
        match *self {
            Content::Empty => Content::Hint(1),
            Content::Hint(n) => Content::Hint(n + 1),
            Content::Mine => Content::Mine,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: Content,
    pub revealed: bool,
    pub marked: bool,
}

impl Cell {
    fn create_empty() -> Cell {
        Cell {
            content: Content::Empty,
            revealed: false,
            marked: false,
        }
    }

    fn toggle_mark(&mut self) {
        let new_state = match (self.revealed, self.marked) {
            (true, marked) => marked,
            (false, marked) => !marked,
        };
        self.marked = new_state;
    }

    fn expose(&mut self) {
        self.revealed = true;
        self.marked = false;
    }

    // a cell blocks the win while it is an unflagged mine or a flagged safe
    fn is_resolved(&self) -> bool {
        match (&self.content, self.marked) {
            (Content::Mine, marked) => marked,
            (_, marked) => !marked,
        }
    }

    fn to_str(&self) -> String {
        match (self.marked, self.revealed) {
            (true, _) => String::from("*"),
            (false, false) => String::from("."),
            (false, true) => match self.content {
                Content::Empty => String::from("/"),
                Content::Hint(n) => (n % 10).to_string(),
                // mines are never revealed, losing ends the game first
                Content::Mine => String::from("."),
            },
        }
    }
}

// (x, y) with x indexing columns and y indexing rows
#[derive(Debug, Eq, Clone, Hash, Copy)]
pub struct Point(pub usize, pub usize);

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

impl BoardSize {
    // the playable board is always this size, smaller sizes exist for tests
    pub const STANDARD: BoardSize = BoardSize {
        width: 1000,
        height: 1000,
    };

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 < self.width && point.1 < self.height
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.area()).filter_map(|x| self.point_from_integer(x)).collect()
    }

    pub fn point_from_integer(&self, x: usize) -> Option<Point> {
        if x >= self.area() {
            return None;
        }
        Some(Point(x % self.width, x / self.width))
    }
}

pub struct Board {
    pub size: BoardSize,
    field: Vec<Vec<Cell>>,
    mine_count: usize,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Board {
    pub fn new_from_ints(width: usize, height: usize) -> Board {
        Board::new_from_size(BoardSize { width, height })
    }

    pub fn new_from_size(size: BoardSize) -> Board {
        let mut field = Vec::with_capacity(size.height);
        for _ in 0..size.height {
            let mut row_vec = Vec::with_capacity(size.width);
            for _ in 0..size.width {
                row_vec.push(Cell::create_empty());
            }
            field.push(row_vec);
        }

        Board {
            size,
            field,
            mine_count: 0,
        }
    }

    pub fn with_mines(size: BoardSize, mines: &[Point]) -> Board {
        let mut board = Board::new_from_size(size);
        for point in mines {
            if board.size.contains(point) && board.place_mine(point) {
                board.mine_count += 1;
            }
        }
        board
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn retrieve_cell(&self, point: &Point) -> &Cell {
        &self.field[point.1][point.0]
    }

    fn retrieve_cell_mutable(&mut self, point: &Point) -> &mut Cell {
        &mut self.field[point.1][point.0]
    }

    fn cells(&self) -> Vec<&Cell> {
        self.field.iter().flatten().collect()
    }

    pub fn neighbor_points(&self, point: &Point) -> Vec<Point> {
        iproduct!(-1..2, -1..2)
            .filter(|(dx, dy)| *dx != 0 || *dy != 0)
            .map(|(dx, dy)| (dx + point.0 as i32, dy + point.1 as i32))
            .filter(|(x, y)| {
                *x >= 0 && *x < self.size.width as i32 && *y >= 0 && *y < self.size.height as i32
            })
            .map(|(x, y)| Point(x as usize, y as usize))
            .collect()
    }

    // rejection sampling: draw until enough distinct cells came up mined.
    // degrades for counts close to the area but stays correct
    pub fn place_mines(&mut self, count: usize, rng: &mut impl Rng) {
        let count = count.min(self.size.area());
        let mut placed = 0;
        while placed < count {
            let point = self
                .size
                .point_from_integer(rng.gen_range(0, self.size.area()))
                .expect("sampled integer must map onto the board");
            if self.place_mine(&point) {
                placed += 1;
            }
        }
        self.mine_count = count;
    }

    fn place_mine(&mut self, point: &Point) -> bool {
        if self.retrieve_cell(point).content.is_mine() {
            return false;
        }
        self.retrieve_cell_mutable(point).content = Content::Mine;
        for neighbor in self.neighbor_points(point) {
            let cell = self.retrieve_cell_mutable(&neighbor);
            cell.content = cell.content.incremented();
        }
        true
    }

    pub fn toggle_mark(&mut self, point: &Point) {
        if !self.size.contains(point) {
            return;
        }
        self.retrieve_cell_mutable(point).toggle_mark()
    }

    pub(crate) fn expose(&mut self, point: &Point) {
        self.retrieve_cell_mutable(point).expose()
    }

    pub fn marked_count(&self) -> usize {
        self.cells().iter().filter(|cell| cell.marked).count()
    }

    pub fn remaining_mines(&self) -> i32 {
        self.mine_count as i32 - self.marked_count() as i32
    }

    pub fn is_won(&self) -> bool {
        self.cells().iter().all(|cell| cell.is_resolved())
    }

    fn render(&self) -> String {
        let mut result = "  ".to_owned();
        for i in 0..self.size.width {
            result += &((i + 1) % 10).to_string()[..];
        }
        result += "\n";
        for (i, row) in self.field.iter().enumerate() {
            result += &(i + 1).to_string()[..];
            result += " ";
            for cell in row {
                result += &cell.to_str()[..];
            }
            result += "\n";
        }
        result
    }
}

#[cfg(test)]
use proptest::prelude::*;


#[cfg(test)]
mod board_tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mined_neighbor_count(board: &Board, point: &Point) -> usize {
        board
            .neighbor_points(point)
            .iter()
            .filter(|neighbor| board.retrieve_cell(neighbor).content.is_mine())
            .count()
    }

    #[test]
    fn win_requires_exact_marks() {
        let mines = [Point(0, 0), Point(2, 1)];
        let size = BoardSize { width: 3, height: 3 };
        let mut board = Board::with_mines(size, &mines);
        assert!(!board.is_won());

        for point in mines.iter() {
            board.toggle_mark(point);
        }
        assert!(board.is_won());

        // unflagging a mine breaks the win
        board.toggle_mark(&Point(0, 0));
        assert!(!board.is_won());
        board.toggle_mark(&Point(0, 0));
        assert!(board.is_won());

        // flagging a safe hint cell breaks it too
        board.toggle_mark(&Point(1, 1));
        assert!(!board.is_won());
    }

    #[test]
    fn out_of_bounds_mark_is_ignored() {
        let mut board = Board::new_from_ints(3, 3);
        board.toggle_mark(&Point(3, 0));
        board.toggle_mark(&Point(0, 7));
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn marking_a_revealed_cell_is_ignored() {
        let mut board = Board::new_from_ints(3, 3);
        board.expose(&Point(1, 1));
        board.toggle_mark(&Point(1, 1));
        assert!(!board.retrieve_cell(&Point(1, 1)).marked);
    }

    #[test]
    fn with_mines_skips_duplicates_and_out_of_bounds() {
        let size = BoardSize { width: 3, height: 3 };
        let board = Board::with_mines(size, &[Point(1, 1), Point(1, 1), Point(9, 9)]);
        assert_eq!(board.mine_count(), 1);
    }

    proptest! {
        #[test]
        fn place_mines_places_exactly_the_clamped_count(
            width in 1..20usize, height in 1..20usize,
            requested in 0..500usize, seed in any::<u64>()) {
            let mut board = Board::new_from_ints(width, height);
            let mut rng = StdRng::seed_from_u64(seed);
            board.place_mines(requested, &mut rng);

            let expected = requested.min(board.size.area());
            let mined = board.size.points().iter()
                .filter(|point| board.retrieve_cell(point).content.is_mine())
                .count();
            prop_assert_eq!(mined, expected);
            prop_assert_eq!(board.mine_count(), expected);
        }

        #[test]
        fn hints_match_independent_recount(
            width in 1..15usize, height in 1..15usize,
            requested in 0..60usize, seed in any::<u64>()) {
            let mut board = Board::new_from_ints(width, height);
            let mut rng = StdRng::seed_from_u64(seed);
            board.place_mines(requested, &mut rng);

            for point in board.size.points() {
                let recount = mined_neighbor_count(&board, &point);
                match board.retrieve_cell(&point).content {
                    Content::Mine => {}
                    Content::Empty => prop_assert_eq!(recount, 0),
                    Content::Hint(n) => prop_assert_eq!(recount, n as usize),
                }
            }
        }

        #[test]
        fn toggle_mark_twice_restores_every_cell(
            width in 1..10usize, height in 1..10usize,
            requested in 0..20usize, seed in any::<u64>()) {
            let mut board = Board::new_from_ints(width, height);
            let mut rng = StdRng::seed_from_u64(seed);
            board.place_mines(requested, &mut rng);

            for point in board.size.points() {
                let before = board.retrieve_cell(&point).clone();
                board.toggle_mark(&point);
                board.toggle_mark(&point);
                prop_assert_eq!(board.retrieve_cell(&point), &before);
            }
        }

        #[test]
        fn point_from_integer_correctness(x in any::<usize>(), width in 1..1000usize, height in 1..1000usize) {
            let size = BoardSize{width, height};
            match size.point_from_integer(x) {
                None => prop_assert!(x >= width * height),
                Some(point) => {
                    prop_assert!(point.0 == x % width && point.0 < width);
                    prop_assert!(point.1 == x / width && point.1 < height);
                }
            }
        }

        #[test]
        fn points_cover_the_board_once(width in 0..40usize, height in 0..40usize) {
            let size = BoardSize{width, height};
            let points = size.points();
            prop_assert_eq!(points.len(), size.area());
            prop_assert!(points.iter().all(|point| size.contains(point)));
            prop_assert_eq!(points.iter().dedup().count(), size.area());
        }

        #[test]
        fn neighbor_points_stay_in_bounds(width in 1..30usize, height in 1..30usize,
                                          x in 0..30usize, y in 0..30usize) {
            let board = Board::new_from_ints(width, height);
            let point = Point(x % width, y % height);
            let neighbors = board.neighbor_points(&point);
            prop_assert!(neighbors.len() <= 8);
            prop_assert!(neighbors.iter().all(|neighbor| board.size.contains(neighbor)));
            prop_assert!(neighbors.iter().all(|neighbor| *neighbor != point));
        }
    }
}

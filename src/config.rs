/// Side length of the board.
pub const BOARD_SIZE: usize = 3;
/// Total number of cells.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// The eight index triples that constitute a win: three rows, three columns,
/// two diagonals. Enumeration order breaks ties.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Largest board the `u128` cell masks can hold (11 * 11 = 121 bits).
pub const MAX_BOARD_SIZE: usize = 11;

/// Fleet composition: lengths of the ships each side places, largest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Attempt ceiling for placing one whole fleet. The budget is shared by
/// the fleet, not granted per ship; exceeding it discards the board.
pub const PLACEMENT_BUDGET: usize = 2000;

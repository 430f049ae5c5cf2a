//! Fruit placement
//!
//! Random sampling is cheap while the board is mostly empty. Once sampling
//! keeps hitting the snake, fall back to choosing among the free cells
//! directly so a nearly full board can never hang the tick.

use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;

use super::grid::Cell;

/// Random samples per board cell before switching to enumeration
const SAMPLES_PER_CELL: usize = 4;

/// Pick a uniformly random cell not in `occupied`
///
/// Returns `None` only when every cell of the `cols` x `rows` board is
/// occupied.
pub fn spawn_fruit<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    cols: i32,
    rows: i32,
) -> Option<Cell> {
    if cols <= 0 || rows <= 0 {
        return None;
    }

    let area = cols as usize * rows as usize;
    if occupied.len() < area {
        for _ in 0..area * SAMPLES_PER_CELL {
            let cell = IVec2::new(rng.random_range(0..cols), rng.random_range(0..rows));
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }
    }

    let free: Vec<Cell> = (0..rows)
        .flat_map(|y| (0..cols).map(move |x| IVec2::new(x, y)))
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_avoids_snake() {
        let mut rng = Pcg32::seed_from_u64(7);
        let occupied: HashSet<Cell> =
            [IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0)].into();

        for _ in 0..200 {
            let cell = spawn_fruit(&mut rng, &occupied, 8, 6).unwrap();
            assert!(!occupied.contains(&cell));
            assert!(cell.x >= 0 && cell.x < 8 && cell.y >= 0 && cell.y < 6);
        }
    }

    #[test]
    fn test_spawn_finds_last_free_cell() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut occupied: HashSet<Cell> = (0..10)
            .flat_map(|y| (0..10).map(move |x| IVec2::new(x, y)))
            .collect();
        occupied.remove(&IVec2::new(7, 4));

        assert_eq!(spawn_fruit(&mut rng, &occupied, 10, 10), Some(IVec2::new(7, 4)));
    }

    #[test]
    fn test_spawn_on_full_board() {
        let mut rng = Pcg32::seed_from_u64(3);
        let occupied: HashSet<Cell> = (0..3)
            .flat_map(|y| (0..3).map(move |x| IVec2::new(x, y)))
            .collect();
        assert_eq!(spawn_fruit(&mut rng, &occupied, 3, 3), None);
    }

    #[test]
    fn test_spawn_on_empty_board_dimensions() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(spawn_fruit(&mut rng, &HashSet::new(), 0, 5), None);
    }
}

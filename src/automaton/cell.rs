//! Cell states and the cyclic-dominance transition.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::AutomatonError;

/// Raw code of a cell that has not been seeded with a live state yet.
pub const UNSEEDED: u8 = 0;

/// One of the three live states. Discriminants are the raw grid codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

impl Cell {
    pub const ALL: [Cell; 3] = [Cell::Rock, Cell::Paper, Cell::Scissors];

    /// Raw grid code.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Position in `Cell::ALL`, used for per-state counters.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize - 1
    }

    /// The state that beats this one.
    pub fn conqueror(self) -> Cell {
        match self {
            Cell::Rock => Cell::Paper,
            Cell::Paper => Cell::Scissors,
            Cell::Scissors => Cell::Rock,
        }
    }

    /// The state this one beats.
    pub fn prey(self) -> Cell {
        match self {
            Cell::Rock => Cell::Scissors,
            Cell::Paper => Cell::Rock,
            Cell::Scissors => Cell::Paper,
        }
    }

    /// Next value of a cell holding `self` whose neighbors agree on `consensus`.
    ///
    /// The cell is taken over only when the consensus is its conqueror.
    #[inline]
    pub fn transition(self, consensus: Cell) -> Cell {
        if consensus == self.conqueror() {
            consensus
        } else {
            self
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = AutomatonError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Cell::Rock),
            2 => Ok(Cell::Paper),
            3 => Ok(Cell::Scissors),
            other => Err(AutomatonError::InvalidCell(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.code()
    }
}

impl Distribution<Cell> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::ALL[rng.gen_range(0..Cell::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_codes_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::try_from(cell.code()), Ok(cell));
        }
        assert_eq!(Cell::Rock.ordinal(), 0);
        assert_eq!(Cell::Scissors.ordinal(), 2);
    }

    #[test]
    fn test_invalid_codes_rejected() {
        assert_eq!(
            Cell::try_from(UNSEEDED),
            Err(AutomatonError::InvalidCell(0))
        );
        assert_eq!(Cell::try_from(4), Err(AutomatonError::InvalidCell(4)));
        assert_eq!(Cell::try_from(255), Err(AutomatonError::InvalidCell(255)));
    }

    #[test]
    fn test_conqueror_and_prey_are_inverse() {
        for cell in Cell::ALL {
            assert_ne!(cell.conqueror(), cell);
            assert_eq!(cell.conqueror().prey(), cell);
            assert_eq!(cell.prey().conqueror(), cell);
        }
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(Cell::Rock.transition(Cell::Rock), Cell::Rock);
        assert_eq!(Cell::Rock.transition(Cell::Paper), Cell::Paper);
        assert_eq!(Cell::Rock.transition(Cell::Scissors), Cell::Rock);

        assert_eq!(Cell::Paper.transition(Cell::Rock), Cell::Paper);
        assert_eq!(Cell::Paper.transition(Cell::Paper), Cell::Paper);
        assert_eq!(Cell::Paper.transition(Cell::Scissors), Cell::Scissors);

        assert_eq!(Cell::Scissors.transition(Cell::Rock), Cell::Rock);
        assert_eq!(Cell::Scissors.transition(Cell::Paper), Cell::Scissors);
        assert_eq!(Cell::Scissors.transition(Cell::Scissors), Cell::Scissors);
    }

    #[test]
    fn test_sampling_covers_all_states() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let cell: Cell = rng.gen();
            seen[cell.ordinal()] += 1;
        }
        // Uniform: each state should land near 1000
        for count in seen {
            assert!((850..1150).contains(&count), "skewed sample: {:?}", seen);
        }
    }
}

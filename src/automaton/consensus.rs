//! Majority vote over a cell's neighbors with random tie-break.

use rand::Rng;

use super::cell::Cell;

/// Per-state counts of a neighbor multiset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 3],
}

impl Tally {
    /// Count raw neighbor codes. Returns the first code that is not a live
    /// state as the error.
    pub fn from_codes(codes: &[u8]) -> Result<Self, u8> {
        let mut tally = Tally::default();
        for &code in codes {
            let cell = Cell::try_from(code).map_err(|_| code)?;
            tally.add(cell);
        }
        Ok(tally)
    }

    #[inline]
    pub fn add(&mut self, cell: Cell) {
        self.counts[cell.ordinal()] += 1;
    }

    pub fn count(&self, cell: Cell) -> u32 {
        self.counts[cell.ordinal()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The most frequent state, choosing uniformly among tied states.
    /// `None` for an empty tally.
    pub fn mode<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let best = *self.counts.iter().max()?;
        if best == 0 {
            return None;
        }

        let mut tied = [Cell::Rock; 3];
        let mut n = 0;
        for cell in Cell::ALL {
            if self.count(cell) == best {
                tied[n] = cell;
                n += 1;
            }
        }

        // A unanimous or clear winner consumes no randomness
        if n == 1 {
            Some(tied[0])
        } else {
            Some(tied[rng.gen_range(0..n)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn codes(cells: &[Cell]) -> Vec<u8> {
        cells.iter().map(|c| c.code()).collect()
    }

    #[test]
    fn test_empty_tally_has_no_mode() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tally = Tally::from_codes(&[]).unwrap();
        assert!(tally.is_empty());
        assert_eq!(tally.mode(&mut rng), None);
    }

    #[test]
    fn test_clear_majority() {
        use Cell::*;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tally = Tally::from_codes(&codes(&[Rock, Paper, Paper, Scissors, Paper])).unwrap();
        assert_eq!(tally.count(Paper), 3);
        assert_eq!(tally.total(), 5);
        for _ in 0..20 {
            assert_eq!(tally.mode(&mut rng), Some(Paper));
        }
    }

    #[test]
    fn test_invalid_code_reported() {
        use Cell::*;
        let mut input = codes(&[Rock, Paper]);
        input.push(0);
        input.push(9);
        assert_eq!(Tally::from_codes(&input), Err(0));
    }

    #[test]
    fn test_tie_only_picks_tied_states() {
        use Cell::*;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tally = Tally::from_codes(&codes(&[Rock, Scissors, Scissors, Rock, Paper])).unwrap();
        for _ in 0..200 {
            let m = tally.mode(&mut rng);
            assert!(m == Some(Rock) || m == Some(Scissors), "picked {:?}", m);
        }
    }

    #[test]
    fn test_two_way_tie_is_fair() {
        use Cell::*;
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let tally = Tally::from_codes(&codes(&[Rock, Rock, Paper, Paper])).unwrap();

        let trials = 10_000;
        let mut rock = 0;
        for _ in 0..trials {
            if tally.mode(&mut rng) == Some(Rock) {
                rock += 1;
            }
        }

        eprintln!("two-way tie: Rock chosen {rock}/{trials}");
        assert!((4700..5300).contains(&rock), "biased tie-break: {rock}/{trials}");
    }

    #[test]
    fn test_three_way_tie_is_fair() {
        use Cell::*;
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let tally = Tally::from_codes(&codes(&[Rock, Paper, Scissors])).unwrap();

        let trials = 9_000;
        let mut seen = [0u32; 3];
        for _ in 0..trials {
            if let Some(cell) = tally.mode(&mut rng) {
                seen[cell.ordinal()] += 1;
            }
        }

        for count in seen {
            assert!((2750..3250).contains(&count), "biased tie-break: {:?}", seen);
        }
    }
}

//! Simulation state: configuration, the double-buffered grid, and the
//! random source driving every step.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::automaton::{
    create_grid, import_region, step_parallel, step_seeded, Cell, Grid, StepReport,
};
use crate::config::SimulationConfig;
use crate::error::{AutomatonError, Result};

/// A running simulation.
///
/// Two grids form an arena: the active one holds the current generation and
/// a step writes the next generation into the other, flipping the active
/// index only once the whole pass succeeded. A failed step therefore leaves
/// the current generation intact and halts the simulation until `reset`.
pub struct State {
    config: SimulationConfig,

    /// Current and next generation buffers.
    buffers: [Grid; 2],

    /// Index of the buffer holding the current generation.
    active: usize,

    /// Generations stepped since the last reset.
    pub generation: u64,

    /// Source of grid seeding and per-step seeds.
    rng: ChaCha8Rng,

    /// Present only when more than one worker thread was requested.
    thread_pool: Option<rayon::ThreadPool>,

    halted: bool,

    last_report: Option<StepReport>,
}

/// Build a pool for `threads` workers, or `None` to step sequentially.
/// Seeded stepping gives identical results either way, so a pool that fails
/// to build simply falls back to sequential stepping.
fn build_pool(threads: u8) -> Option<rayon::ThreadPool> {
    if threads <= 1 {
        return None;
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build()
        .ok()
}

impl State {
    /// Create a simulation and seed its first grid from `config`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = create_grid(config.dimension(), config.start_pattern, &mut rng)?;
        Ok(State::assemble(config, grid, rng))
    }

    /// Create a simulation around an existing grid (for hosts that seed
    /// their own patterns, and for tests). The config's density is ignored
    /// in favour of the grid's dimension.
    pub fn from_grid(config: SimulationConfig, grid: Grid) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let rng = ChaCha8Rng::seed_from_u64(seed);
        State::assemble(config, grid, rng)
    }

    fn assemble(config: SimulationConfig, grid: Grid, rng: ChaCha8Rng) -> Self {
        let spare = grid.clone();
        let thread_pool = build_pool(config.threads);
        State {
            config,
            buffers: [grid, spare],
            active: 0,
            generation: 0,
            rng,
            thread_pool,
            halted: false,
            last_report: None,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.buffers[self.active]
    }

    pub fn dimension(&self) -> i16 {
        self.grid().dimension()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn last_report(&self) -> Option<StepReport> {
        self.last_report
    }

    /// True once a step under a deterministic neighborhood changed nothing;
    /// every later step would reproduce the same grid.
    pub fn is_at_equilibrium(&self) -> bool {
        !self.config.neighborhood.is_random()
            && self.last_report.is_some_and(|report| report.is_unchanged())
    }

    /// Replace the grid with a freshly seeded one from the same
    /// configuration and clear any halt.
    pub fn reset(&mut self) -> Result<()> {
        let grid = create_grid(
            self.config.dimension(),
            self.config.start_pattern,
            &mut self.rng,
        )?;
        self.buffers[1] = grid.clone();
        self.buffers[0] = grid;
        self.active = 0;
        self.generation = 0;
        self.halted = false;
        self.last_report = None;
        Ok(())
    }

    /// Overwrite one cell of the current generation.
    pub fn set_cell(&mut self, x: i16, y: i16, cell: Cell) -> Result<()> {
        let active = self.active;
        self.buffers[active].set(x, y, cell)
    }

    /// Import raw codes into a rectangle of the current generation.
    pub fn import_region(
        &mut self,
        in_buf: &[u8],
        min_x: i16,
        min_y: i16,
        max_x: i16,
        max_y: i16,
    ) -> Result<u64> {
        let active = self.active;
        import_region(&mut self.buffers[active], in_buf, min_x, min_y, max_x, max_y)
    }

    /// Advance one generation.
    pub fn step(&mut self) -> Result<StepReport> {
        if self.halted {
            return Err(AutomatonError::Halted);
        }

        let seed: u64 = self.rng.gen();
        let kind = self.config.neighborhood;

        let (front, back) = self.buffers.split_at_mut(1);
        let (src, dst) = if self.active == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };

        let result = match &self.thread_pool {
            Some(pool) => step_parallel(src, dst, kind, seed, pool),
            None => step_seeded(src, dst, kind, seed),
        };

        match result {
            Ok(report) => {
                self.active ^= 1;
                self.generation += 1;
                self.last_report = Some(report);
                Ok(report)
            }
            Err(err) => {
                self.halted = true;
                Err(err)
            }
        }
    }
}

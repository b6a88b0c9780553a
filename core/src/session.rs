use crate::*;

/// Supplies the mine layout for every new game of a session.
pub trait LayoutSource {
    fn next_layout(&mut self, config: &BoardConfig) -> MineLayout;
}

impl<F> LayoutSource for F
where
    F: FnMut(&BoardConfig) -> MineLayout,
{
    fn next_layout(&mut self, config: &BoardConfig) -> MineLayout {
        self(config)
    }
}

/// Draws every game from a [`ProbabilityGenerator`], deriving one seed per game from a base seed.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededLayouts {
    seed: u64,
    games: u64,
}

impl SeededLayouts {
    pub fn new(seed: u64) -> Self {
        Self { seed, games: 0 }
    }

    fn game_seed(&self) -> u64 {
        // golden ratio increment, as in splitmix64
        self.seed
            .wrapping_add(self.games.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

impl LayoutSource for SeededLayouts {
    fn next_layout(&mut self, config: &BoardConfig) -> MineLayout {
        let seed = self.game_seed();
        self.games = self.games.wrapping_add(1);
        ProbabilityGenerator::new(seed, config.difficulty_tenths()).generate(config.size())
    }
}

/// Owns the current board and the running score across restarts.
#[derive(Clone, Debug)]
pub struct Session<S = SeededLayouts> {
    config: BoardConfig,
    source: S,
    board: Board,
    score: u32,
    highlight_mines: bool,
}

impl Session<SeededLayouts> {
    /// Starts a session with randomly generated layouts.
    pub fn new_game(config: BoardConfig, seed: u64) -> Self {
        Self::with_source(config, SeededLayouts::new(seed))
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let mut session = Self::new_game(config.board_config()?, config.seed_or_random());
        session.set_highlight_mines(config.highlight_mines);
        Ok(session)
    }
}

impl<S: LayoutSource> Session<S> {
    pub fn with_source(config: BoardConfig, mut source: S) -> Self {
        let board = Board::new(source.next_layout(&config));
        let mut session = Self {
            config,
            source,
            board,
            score: 0,
            highlight_mines: false,
        };
        session.on_new_board();
        session
    }

    /// Throws the current board away and deals a new one with the same parameters, keeping the score.
    pub fn restart(&mut self) {
        log::debug!("Restarting, score: {}", self.score);
        self.board = Board::new(self.source.next_layout(&self.config));
        self.on_new_board();
    }

    /// Sole input entry point: opens the cell at `(x, y)` and settles the score.
    pub fn select_cell(&mut self, x: Coord, y: Coord) -> Result<RevealOutcome> {
        let outcome = self.board.reveal((x, y))?;
        if outcome.has_update() && self.board.outcome() == GameOutcome::Won {
            self.award_win();
        }
        Ok(outcome)
    }

    fn on_new_board(&mut self) {
        let size = self.board.size();
        log::info!(
            "Starting game with a grid of size {}x{}, difficulty {}/10",
            size,
            size,
            self.config.difficulty_tenths()
        );
        log::debug!("Layout has {} mines", self.board.mine_count());
    }

    fn award_win(&mut self) {
        self.score = self.score.saturating_add(1);
        log::debug!("Game won, score: {}", self.score);
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highlight_mines(&self) -> bool {
        self.highlight_mines
    }

    pub fn set_highlight_mines(&mut self, highlight_mines: bool) {
        self.highlight_mines = highlight_mines;
    }

    /// All mine positions, only while mine highlighting is enabled. Never touches the game state.
    pub fn mine_positions(&self) -> Option<Vec<Coord2>> {
        self.highlight_mines
            .then(|| self.board.mine_layout().mine_coords())
    }

    /// Mines still covered once the game has ended, in the order a "show all mines" sequence would uncover them.
    pub fn remaining_mines(&self) -> Option<Vec<Coord2>> {
        self.board.is_finished().then(|| self.board.hidden_mines())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(&self.board, self.score, self.mine_positions())
    }
}

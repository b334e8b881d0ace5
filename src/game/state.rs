//! Game state machine: hands, boneyard, turn order and results.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::Board;
use crate::core::{
    Action, ActionRecord, End, GameConfig, GameRng, Move, PlayerId, PlayerMap, StartingPlayer,
};
use crate::error::{Error, Result};
use crate::rules::{GameResult, RulesEngine};
use crate::tiles::{Domino, Hand};

/// A game of dominoes in progress (or finished).
///
/// Every tile of the set is in exactly one place: a hand, the boneyard or
/// the board. Tiles only move from the boneyard to a hand (a draw) and from
/// a hand to the board (a play).
///
/// ## Turn flow
///
/// The player to move picks one of [`Game::valid_moves`] and submits it with
/// [`Game::make_move`]. If the next player cannot play, the game draws for
/// them one tile at a time until something fits or the boneyard is empty,
/// and passes for them if nothing does. A play resets the pass counter; once
/// every player has passed in succession the game is blocked. As a result
/// `valid_moves` is only ever empty for a finished game.
///
/// Cloning is the branching primitive: the board, boneyard and history are
/// `im` vectors and hands are plain values, so a clone shares nothing
/// mutable with the original.
///
/// ```
/// use dominoes::{Game, GameConfig};
///
/// let mut game = Game::new(GameConfig::default(), 7).unwrap();
/// while game.result().is_none() {
///     let mv = game.valid_moves()[0];
///     game.make_move(mv.domino, mv.end).unwrap();
/// }
/// assert_eq!(game.all_tiles().len(), 28);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    hands: PlayerMap<Hand>,
    boneyard: Vector<Domino>,
    turn: PlayerId,
    consecutive_passes: usize,
    result: Option<GameResult>,
    history: Vector<ActionRecord>,
}

impl Game {
    /// Shuffle the configured set with `seed` and deal a new game.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        Self::deal(config, &mut rng)
    }

    /// Deal a new game, drawing the shuffle from `rng`.
    ///
    /// Seats receive consecutive runs of the shuffled set; what is left
    /// becomes the boneyard, drawn from the front.
    pub fn deal(config: GameConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let mut tiles = Domino::full_set(config.max_pip);
        rng.shuffle(&mut tiles);

        let hand_size = config.hand_size;
        let hands = PlayerMap::new(config.player_count, |p| {
            let start = p.index() * hand_size;
            tiles[start..start + hand_size].iter().copied().collect::<Hand>()
        });
        let boneyard: Vector<Domino> = tiles[config.player_count * hand_size..]
            .iter()
            .copied()
            .collect();

        let turn = opening_player(config.starting_player, &hands);
        debug!(
            players = config.player_count,
            boneyard = boneyard.len(),
            %turn,
            "dealt new game"
        );

        Ok(Self {
            config,
            board: Board::new(),
            hands,
            boneyard,
            turn,
            consecutive_passes: 0,
            result: None,
            history: Vector::new(),
        })
    }

    /// Assemble a game from an explicit deal.
    ///
    /// The tiles need not form a complete set, which keeps hand-built test
    /// trees small, but no tile may appear twice and every hand must hold
    /// at least one tile.
    pub fn from_parts(hands: Vec<Hand>, boneyard: Vec<Domino>, turn: PlayerId) -> Result<Self> {
        if hands.is_empty() || hands.len() > 255 {
            return Err(Error::InvalidConfig(format!(
                "{} hands given, expected 1 to 255",
                hands.len()
            )));
        }
        if hands.iter().any(Hand::is_empty) {
            return Err(Error::InvalidConfig("every hand must hold a tile".into()));
        }
        if turn.index() >= hands.len() {
            return Err(Error::InvalidConfig(format!(
                "{turn} does not exist in a {}-player game",
                hands.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for tile in hands.iter().flat_map(Hand::iter).chain(boneyard.iter().copied()) {
            if !seen.insert(tile) {
                return Err(Error::DuplicateTile(tile));
            }
        }

        let max_pip = seen
            .iter()
            .map(|d| d.normalized().1)
            .max()
            .unwrap_or_default();
        let config = GameConfig {
            player_count: hands.len(),
            hand_size: hands.iter().map(Hand::len).max().unwrap_or_default(),
            max_pip,
            starting_player: StartingPlayer::Fixed(turn),
        };

        Ok(Self {
            config,
            board: Board::new(),
            hands: PlayerMap::from_vec(hands),
            boneyard: boneyard.into_iter().collect(),
            turn,
            consecutive_passes: 0,
            result: None,
            history: Vector::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The hand of `player`.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    /// Undrawn tiles, next draw first.
    pub fn boneyard(&self) -> impl Iterator<Item = Domino> + '_ {
        self.boneyard.iter().copied()
    }

    #[must_use]
    pub fn boneyard_len(&self) -> usize {
        self.boneyard.len()
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    /// Passes since the last play.
    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Every play, draw and pass so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Every tile in the game: hands in seat order, then the boneyard, then
    /// the board from left to right.
    #[must_use]
    pub fn all_tiles(&self) -> Vec<Domino> {
        self.hands
            .iter()
            .flat_map(|(_, hand)| hand.iter())
            .chain(self.boneyard())
            .chain(self.board.tiles().map(|t| t.domino()))
            .collect()
    }

    // === Moves ===

    /// Legal moves for the player to move.
    ///
    /// One move per tile and matching end. On an empty board both ends are
    /// the same place, so each tile is offered once, tagged `End::Left`;
    /// playing it on the right would build the identical board. Trees
    /// enumerated from an empty board therefore count each opening once.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.result.is_some() {
            return Vec::new();
        }

        let hand = &self.hands[self.turn];
        if self.board.is_empty() {
            return hand.iter().map(|d| Move::new(d, End::Left)).collect();
        }

        hand.iter()
            .flat_map(|d| [Move::new(d, End::Left), Move::new(d, End::Right)])
            .filter(|mv| self.board.accepts(mv.domino, mv.end))
            .collect()
    }

    /// Play `domino` from the current hand at `end`.
    ///
    /// Returns `Some(result)` when the move ends the game, either because
    /// the hand is now empty or because every following player was forced
    /// to pass. On error nothing changes.
    pub fn make_move(&mut self, domino: Domino, end: End) -> Result<Option<GameResult>> {
        if self.result.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.turn;
        if !self.hands[player].contains(domino) {
            return Err(Error::NotInHand { player, domino });
        }

        self.board.add(domino, end)?;
        self.hands[player].remove(domino);
        self.record(player, Action::Play(Move::new(domino, end)));
        debug!(%player, %domino, %end, board = %self.board, "played");

        if self.hands[player].is_empty() {
            self.finish(GameResult::Winner(player));
            return Ok(self.result);
        }

        self.consecutive_passes = 0;
        self.turn = player.next(self.player_count());
        self.settle_turn();
        Ok(self.result)
    }

    /// Draw or pass for players who cannot play, until someone can or the
    /// game is blocked.
    fn settle_turn(&mut self) {
        while self.result.is_none() && !self.can_play(self.turn) {
            let player = self.turn;
            if let Some(tile) = self.boneyard.pop_front() {
                self.hands[player].push(tile);
                self.record(player, Action::Draw(tile));
                debug!(%player, %tile, "drew");
                continue;
            }

            self.record(player, Action::Pass);
            self.consecutive_passes += 1;
            debug!(%player, passes = self.consecutive_passes, "passed");

            if self.consecutive_passes >= self.player_count() {
                self.finish(GameResult::Blocked);
            } else {
                self.turn = player.next(self.player_count());
            }
        }
    }

    fn can_play(&self, player: PlayerId) -> bool {
        let hand = &self.hands[player];
        match (self.board.left_end(), self.board.right_end()) {
            (Ok(left), Ok(right)) => hand.iter().any(|d| d.matches(left) || d.matches(right)),
            _ => !hand.is_empty(),
        }
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            player,
            action,
            sequence,
        });
    }

    fn finish(&mut self, result: GameResult) {
        debug!(%result, board_len = self.board.len(), "game over");
        self.result = Some(result);
    }
}

/// Seat that opens under `rule`.
fn opening_player(rule: StartingPlayer, hands: &PlayerMap<Hand>) -> PlayerId {
    match rule {
        StartingPlayer::Fixed(player) => player,
        StartingPlayer::HighestDouble => hands
            .iter()
            .filter_map(|(player, hand)| hand.highest_double().map(|d| (d, player)))
            .max()
            .map_or(PlayerId::new(0), |(_, player)| player),
    }
}

impl RulesEngine for Game {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.valid_moves()
    }

    fn apply_move(&mut self, mv: &Move) -> Result<Option<GameResult>> {
        self.make_move(mv.domino, mv.end)
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    fn depth(&self) -> usize {
        self.board.len()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "board: {}", self.board)?;
        for (player, hand) in self.hands.iter() {
            let marker = if player == self.turn { "*" } else { " " };
            writeln!(f, "{marker}{player}: {hand}")?;
        }
        write!(f, "boneyard: {} tiles", self.boneyard.len())
    }
}

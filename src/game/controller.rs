//! Game controller and builder.

use tracing::{debug, info};

use super::turn::{DrawSource, TurnRequest, TurnResult};
use crate::core::{Card, GameConfig, GameError, GameRng, Player, PlayerId, Result};
use crate::deck::{Deck, DiscardPile};
use crate::round::{
    apply_scores, check_eliminations, score_round, RoundEnd, RoundEvent, RoundObserver, RoundOutcome,
    StopVerdict,
};

/// Builder for creating a `Game`.
pub struct GameBuilder {
    player_count: usize,
    config: GameConfig,
    seed: Option<u64>,
    stacked_deck: Option<Vec<Card>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            config: GameConfig::default(),
            seed: None,
            stacked_deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the shuffle RNG. Without a seed the game draws one from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal the first round from `cards` as given, last card first.
    ///
    /// Later rounds are shuffled normally.
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.stacked_deck = Some(cards);
        self
    }

    /// Build the game and deal the first round.
    pub fn build(self) -> Result<Game> {
        self.config.check_player_count(self.player_count)?;
        self.config.validate()?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let deck = match self.stacked_deck {
            Some(cards) => Deck::stacked(cards, &self.config)?,
            None => {
                let mut deck = Deck::standard(&self.config)?;
                deck.shuffle(&mut rng);
                deck
            }
        };

        let mut game = Game {
            config: self.config,
            players: PlayerId::all(self.player_count).map(Player::new).collect(),
            deck,
            discard_pile: DiscardPile::new(),
            current_player_index: 0,
            round: 1,
            rng,
            last_outcome: None,
            observers: Vec::new(),
        };
        game.deal()?;

        info!(
            players = game.players.len(),
            seed = game.rng.seed(),
            deck = game.deck.len(),
            "game created"
        );

        Ok(game)
    }
}

/// The round/turn state machine.
///
/// Players keep their seats for the whole session. Each round replaces the
/// deck, the discard pile and every hand; points and eliminations carry over.
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    deck: Deck,
    discard_pile: DiscardPile,
    current_player_index: usize,
    round: u32,
    rng: GameRng,
    last_outcome: Option<RoundOutcome>,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl Game {
    /// Create a game with the default configuration and a random seed.
    ///
    /// Fails with `InvalidPlayerCount` outside 2..=4 players.
    pub fn new(player_count: usize) -> Result<Self> {
        GameBuilder::new().player_count(player_count).build()
    }

    /// Create a reproducible game.
    pub fn with_seed(player_count: usize, seed: u64) -> Result<Self> {
        GameBuilder::new().player_count(player_count).seed(seed).build()
    }

    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Register an observer for round events.
    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Queries ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All players in seating order, eliminated ones included.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.top()
    }

    /// Current round, starting at 1.
    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// Seed of the shuffle RNG, for replays.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Most recently resolved round.
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// True when exactly one player is left.
    pub fn is_game_over(&self) -> bool {
        self.active_count() == 1
    }

    /// The last player standing, once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_game_over() {
            return None;
        }
        self.active_players().next()
    }

    // === Draws ===

    /// Take the top card of the deck.
    ///
    /// Used standalone by callers who want to see a card before choosing
    /// where to place it; pass it back through `TurnRequest::with_drawn_card`.
    pub fn draw_from_deck(&mut self) -> Result<Card> {
        self.deck.draw()
    }

    /// Take the top card of the discard pile.
    pub fn draw_from_discard(&mut self) -> Result<Card> {
        self.discard_pile.draw()
    }

    // === Turns ===

    /// Play the current player's turn.
    ///
    /// Fails with `PlayerEliminated` if the current seat is eliminated
    /// (callers rotate with `next_player`), and with `InvalidSwapIndex`
    /// before drawing if the slot does not exist.
    pub fn play_turn(&mut self, request: TurnRequest) -> Result<TurnResult> {
        let index = self.current_player_index;
        let player_id = self.players[index].id();
        if self.players[index].is_eliminated() {
            return Err(GameError::PlayerEliminated(player_id));
        }

        if self.deck.is_empty() {
            debug!(player = %player_id, "deck empty at start of turn");
            let outcome = self.resolve_round(RoundEnd::CardsExhausted)?;
            return Ok(TurnResult::RoundEnded(outcome));
        }

        if let Some(slot) = request.swap_index {
            let hand_size = self.players[index].cards().len();
            if slot >= hand_size {
                return Err(GameError::InvalidSwapIndex { index: slot, hand_size });
            }
        }

        let card = match request.drawn_card {
            Some(card) => card,
            None => match request.take_from {
                DrawSource::Deck => self.deck.draw()?,
                DrawSource::Discard => self.discard_pile.draw()?,
            },
        };

        match request.swap_index {
            Some(slot) => {
                let old = self.players[index].swap(slot, card)?;
                self.discard_pile.push(old);
                debug!(player = %player_id, source = ?request.take_from, %card, slot, discarded = %old, "swapped card");
            }
            None => {
                self.discard_pile.push(card);
                debug!(player = %player_id, source = ?request.take_from, %card, "discarded drawn card");
            }
        }

        if request.stop {
            let outcome = self.resolve_round(RoundEnd::Stopped { stopper: player_id })?;
            return Ok(TurnResult::RoundEnded(outcome));
        }

        let next = self.next_player()?;
        Ok(TurnResult::Continued { next })
    }

    /// Stop the round without drawing.
    ///
    /// `player` defaults to the current player; pass it explicitly when play
    /// has already rotated past the player who wants to stop.
    pub fn stop_round(&mut self, player: Option<PlayerId>) -> Result<RoundOutcome> {
        let stopper = match player {
            Some(id) => self.player(id).ok_or(GameError::UnknownPlayer(id))?,
            None => self.current_player(),
        };
        if stopper.is_eliminated() {
            return Err(GameError::PlayerEliminated(stopper.id()));
        }
        let stopper = stopper.id();
        self.resolve_round(RoundEnd::Stopped { stopper })
    }

    /// Advance to the next active seat, wrapping around.
    pub fn next_player(&mut self) -> Result<PlayerId> {
        if self.active_count() == 0 {
            return Err(GameError::NoActivePlayers);
        }

        let seats = self.players.len();
        loop {
            self.current_player_index = (self.current_player_index + 1) % seats;
            if self.players[self.current_player_index].is_active() {
                return Ok(self.players[self.current_player_index].id());
            }
        }
    }

    // === Round lifecycle ===

    fn resolve_round(&mut self, end: RoundEnd) -> Result<RoundOutcome> {
        let scoring = score_round(&self.players, end)?;
        let mut events: Vec<RoundEvent> = self
            .active_players()
            .map(|p| RoundEvent::HandRevealed {
                player: p.id(),
                cards: p.cards().iter().copied().collect(),
                sum: p.sum(),
            })
            .collect();

        match (end, scoring.verdict) {
            (RoundEnd::Stopped { stopper }, Some(verdict)) => {
                let sum = self.player(stopper).map_or(0, Player::sum);
                events.push(RoundEvent::StopCalled { stopper, sum });
                events.push(match verdict {
                    StopVerdict::Won => RoundEvent::StopperWon { stopper },
                    StopVerdict::Lost { penalty } => RoundEvent::StopperLost { stopper, penalty },
                });
                info!(round = self.round, stopper = %stopper, sum, ?verdict, "round ended by stop");
            }
            _ => {
                events.push(RoundEvent::DeckExhausted);
                info!(round = self.round, "round ended by deck exhaustion");
            }
        }

        apply_scores(&mut self.players, &scoring);
        for delta in &scoring.deltas {
            let total = self.player(delta.player).map_or(0, Player::points);
            events.push(RoundEvent::PointsAwarded { player: delta.player, delta: delta.points, total });
        }

        let eliminated = check_eliminations(&mut self.players, self.config.elimination_points);
        for &id in &eliminated {
            let points = self.player(id).map_or(0, Player::points);
            info!(player = %id, points, "player eliminated");
            events.push(RoundEvent::PlayerEliminated { player: id, points });
        }

        let outcome = RoundOutcome {
            round: self.round,
            end,
            verdict: scoring.verdict,
            deltas: scoring.deltas,
            eliminated,
        };
        self.last_outcome = Some(outcome.clone());

        // Emit what is settled before dealing, in case the deal fails.
        self.emit(&events);
        self.reset_round()?;

        if self.active_count() <= 1 {
            let winner = self.active_players().next().map(Player::id);
            info!(winner = ?winner, rounds = outcome.round, "game over");
            self.emit(&[RoundEvent::GameOver { winner }]);
        }

        Ok(outcome)
    }

    /// Build a fresh deck and deal the next round.
    ///
    /// The current seat is kept: the next round starts wherever rotation
    /// left off, not after the stopper.
    fn reset_round(&mut self) -> Result<()> {
        let mut deck = Deck::standard(&self.config)?;
        deck.shuffle(&mut self.rng);
        self.deck = deck;
        self.discard_pile = DiscardPile::new();

        for player in &mut self.players {
            player.clear_hand();
        }
        let dealt_players = self.deal()?;
        self.round += 1;

        info!(round = self.round, dealt_players, deck = self.deck.len(), "round dealt");
        self.emit(&[RoundEvent::RoundReset {
            round: self.round,
            dealt_players,
            deck_remaining: self.deck.len(),
        }]);
        Ok(())
    }

    /// Deal a hand to every active player. Returns how many were dealt.
    fn deal(&mut self) -> Result<usize> {
        let mut dealt = 0;
        for player in self.players.iter_mut().filter(|p| p.is_active()) {
            let hand = self.deck.deal(self.config.cards_per_player)?;
            player.deal(hand);
            dealt += 1;
        }
        Ok(dealt)
    }

    fn emit(&mut self, events: &[RoundEvent]) {
        for observer in &mut self.observers {
            for event in events {
                observer.on_event(event);
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("round", &self.round)
            .field("players", &self.players)
            .field("current_player_index", &self.current_player_index)
            .field("deck", &self.deck.len())
            .field("discard_pile", &self.discard_pile.cards())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

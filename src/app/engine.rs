use rand::{Rng, rng};

use super::catalog::{COUNTRIES, DIMENSIONS, Dimension};

pub const ROUNDS: u32 = 5;
pub const START_SECONDS: u32 = 30;

// the player's call on the current prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    High,
    Low,
}

// everything that can move the game, delivered one at a time in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Answer(Choice),
    Tick,
    Advance,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Waiting,
    Playing,
    Reveal,
    Over,
}

// one posed question: a dimension paired with a country
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    pub dimension: Dimension,
    pub country: &'static str,
}

#[derive(Debug)]
pub struct Engine {
    phase: Phase,
    round: u32,
    score: u32,
    seconds: u32,
    prompt: Option<Prompt>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            phase: Phase::Waiting,
            round: 0,
            score: 0,
            seconds: START_SECONDS,
            prompt: None,
        }
    }
}

impl Engine {
    // events that make no sense for the current phase are dropped, so a
    // repeated answer or a reveal delay firing after the game ended cannot
    // move anything
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Start => {
                if let Phase::Waiting | Phase::Over = self.phase {
                    self.start();
                }
            }
            // every answer counts; there is no ground-truth data to check it against
            Event::Answer(_) => {
                if let Phase::Playing = self.phase {
                    self.score += 1;
                    self.phase = Phase::Reveal;
                }
            }
            Event::Tick => {
                if let Phase::Playing | Phase::Reveal = self.phase {
                    self.seconds = self.seconds.saturating_sub(1);
                    if self.seconds == 0 {
                        self.phase = Phase::Over;
                    }
                }
            }
            Event::Advance => {
                if let Phase::Reveal = self.phase {
                    if self.round < ROUNDS {
                        self.next_round();
                        self.phase = Phase::Playing;
                    } else {
                        self.phase = Phase::Over;
                    }
                }
            }
        }
    }

    fn start(&mut self) {
        self.score = 0;
        self.round = 0;
        self.seconds = START_SECONDS;
        self.next_round();
        self.phase = Phase::Playing;
    }

    // uniform and independent, repeats across rounds allowed
    fn next_round(&mut self) {
        let mut rng = rng();

        self.prompt = Some(Prompt {
            dimension: DIMENSIONS[rng.random_range(0..DIMENSIONS.len())],
            country: COUNTRIES[rng.random_range(0..COUNTRIES.len())],
        });
        self.round += 1;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Engine {
        let mut game = Engine::default();
        game.apply(Event::Start);
        game
    }

    fn answered() -> Engine {
        let mut game = started();
        game.apply(Event::Answer(Choice::High));
        game
    }

    #[test]
    fn fresh_engine_waits_with_a_full_clock() {
        let game = Engine::default();
        assert_eq!(game.phase(), Phase::Waiting);
        assert_eq!(game.round(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.seconds(), START_SECONDS);
        assert!(game.prompt().is_none());
    }

    #[test]
    fn start_resets_and_deals_the_first_round() {
        let game = started();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.round(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.seconds(), START_SECONDS);
        assert!(game.prompt().is_some());
    }

    #[test]
    fn prompts_come_from_the_catalogs() {
        for _ in 0..50 {
            let game = started();
            let prompt = game.prompt().unwrap();
            assert!(DIMENSIONS.contains(&prompt.dimension));
            assert!(COUNTRIES.contains(&prompt.country));
        }
    }

    #[test]
    fn either_answer_scores_one_point() {
        let mut game = started();
        game.apply(Event::Answer(Choice::High));
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), Phase::Reveal);

        let mut game = started();
        game.apply(Event::Answer(Choice::Low));
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), Phase::Reveal);
    }

    #[test]
    fn answers_outside_playing_are_dropped() {
        let mut game = Engine::default();
        game.apply(Event::Answer(Choice::High));
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), Phase::Waiting);

        // mashing the buttons while the result is up
        let mut game = answered();
        game.apply(Event::Answer(Choice::Low));
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), Phase::Reveal);
    }

    #[test]
    fn advance_deals_the_next_round_below_the_limit() {
        let mut game = answered();
        game.apply(Event::Advance);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.round(), 2);
        assert!(game.prompt().is_some());
    }

    #[test]
    fn fifth_reveal_ends_the_game_with_five_points() {
        let mut game = Engine::default();
        game.apply(Event::Start);

        for round in 1..=ROUNDS {
            assert_eq!(game.round(), round);
            assert_eq!(game.phase(), Phase::Playing);
            game.apply(Event::Answer(Choice::High));
            assert_eq!(game.phase(), Phase::Reveal);
            game.apply(Event::Advance);
        }

        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.score(), ROUNDS);
        assert_eq!(game.round(), ROUNDS);
    }

    #[test]
    fn ticks_run_the_clock_during_play_and_reveal() {
        let mut game = started();
        game.apply(Event::Tick);
        assert_eq!(game.seconds(), START_SECONDS - 1);

        game.apply(Event::Answer(Choice::Low));
        game.apply(Event::Tick);
        assert_eq!(game.seconds(), START_SECONDS - 2);
    }

    #[test]
    fn clock_reaching_zero_ends_the_game_at_any_round() {
        let mut game = started();
        for _ in 0..START_SECONDS {
            game.apply(Event::Tick);
        }
        assert_eq!(game.seconds(), 0);
        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn stale_advance_after_a_timeout_is_dropped() {
        let mut game = answered();
        for _ in 0..START_SECONDS {
            game.apply(Event::Tick);
        }
        assert_eq!(game.phase(), Phase::Over);

        // the old reveal delay firing against a finished game
        game.apply(Event::Advance);
        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn ticks_outside_active_play_are_dropped() {
        let mut game = Engine::default();
        game.apply(Event::Tick);
        assert_eq!(game.seconds(), START_SECONDS);

        let mut game = started();
        for _ in 0..START_SECONDS {
            game.apply(Event::Tick);
        }
        game.apply(Event::Tick);
        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.seconds(), 0);
    }

    #[test]
    fn play_again_matches_a_fresh_start() {
        let mut game = answered();
        for _ in 0..START_SECONDS {
            game.apply(Event::Tick);
        }
        assert_eq!(game.phase(), Phase::Over);

        game.apply(Event::Start);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.round(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.seconds(), START_SECONDS);
        assert!(game.prompt().is_some());
    }
}

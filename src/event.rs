//! Chronological record of every guess made during a game.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{GuessOutcome, Player};
use crate::coordinate::Coordinate;

/// Category of a logged guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Hit,
    Miss,
    Fail,
}

impl From<&GuessOutcome> for EventKind {
    fn from(outcome: &GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::Hit { .. } => EventKind::Hit,
            GuessOutcome::Miss => EventKind::Miss,
            GuessOutcome::Fail(_) => EventKind::Fail,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Hit => write!(f, "HIT"),
            EventKind::Miss => write!(f, "MISS"),
            EventKind::Fail => write!(f, "FAIL"),
        }
    }
}

/// One entry of a game's history. Events are never changed once logged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEvent {
    number: u32,
    kind: EventKind,
    coordinate: Coordinate,
    attacker: Player,
    outcome: GuessOutcome,
    details: Vec<String>,
}

impl GameEvent {
    /// The coordinate is stored without its guess or ship state so the log
    /// cannot leak where ships are.
    pub(crate) fn new(
        number: u32,
        attacker: Player,
        coordinate: &Coordinate,
        outcome: GuessOutcome,
    ) -> Self {
        Self {
            number,
            kind: EventKind::from(&outcome),
            coordinate: coordinate.stripped(),
            attacker,
            outcome,
            details: vec![String::from(outcome.detail())],
        }
    }

    /// Position of the event in its game's log, starting at 1.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn attacker(&self) -> Player {
        self.attacker
    }

    pub fn victim(&self) -> Player {
        self.attacker.opponent()
    }

    pub fn outcome(&self) -> GuessOutcome {
        self.outcome
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// "win" or "sunk" for hits that sank a ship, the reason for failures,
    /// and an empty string otherwise.
    pub fn extra_info(&self) -> &str {
        match self.kind {
            EventKind::Miss => "",
            EventKind::Hit | EventKind::Fail => {
                self.details.first().map(String::as_str).unwrap_or("")
            }
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} -> {} {}",
            self.number, self.attacker, self.coordinate, self.kind
        )?;
        match self.extra_info() {
            "" => Ok(()),
            info => write!(f, " ({})", info),
        }
    }
}

/// Append-only event log with its own numbering.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    counter: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event for `outcome` and return a reference to it.
    pub fn record(
        &mut self,
        attacker: Player,
        coordinate: &Coordinate,
        outcome: GuessOutcome,
    ) -> &GameEvent {
        self.counter += 1;
        self.events
            .push(GameEvent::new(self.counter, attacker, coordinate, outcome));
        &self.events[self.events.len() - 1]
    }

    /// Every event, failures included.
    pub fn all(&self) -> &[GameEvent] {
        &self.events
    }

    /// Non-failure events numbered after `since`, in log order.
    pub fn since(&self, since: u32) -> impl Iterator<Item = &GameEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.number > since && e.kind != EventKind::Fail)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of the most recent event, or 0 when empty.
    pub fn last_number(&self) -> u32 {
        self.counter
    }
}

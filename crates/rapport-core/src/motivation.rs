//! Buyer-motivation classification.
//!
//! Two categorical signals about a message recipient (what they most want,
//! what they most want to avoid) are scored against four buyer archetypes.
//! The highest-scoring archetype biases the tone of generated outreach; with
//! no usable signal the recipient is treated as `Balanced`.
//!
//! | Desire               | Fear                  | Archetype |
//! |----------------------|-----------------------|-----------|
//! | `breakthrough`       | `plateauing`          | Dreamer   |
//! | `relationships`      | `missing_connections` | Lover     |
//! | `informed_decisions` | `wrong_choice`        | Scholar   |
//! | `achieve_goals`      | `wasting_time`        | Boss      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Points a single matching signal contributes to its archetype
pub const SIGNAL_WEIGHT: u8 = 2;

/// The recipient's primary motivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreDesire {
    Breakthrough,
    Relationships,
    InformedDecisions,
    AchieveGoals,
    NotSure,
}

/// The recipient's primary aversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreFear {
    Plateauing,
    MissingConnections,
    WrongChoice,
    WastingTime,
    NotSure,
}

/// Buyer archetype resolved from desire and fear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Driven by transformation and breakthroughs
    Dreamer,
    /// Driven by connection and belonging
    Lover,
    /// Driven by evidence and sound decisions
    Scholar,
    /// Driven by results and efficiency
    Boss,
    /// No usable signal; cover all four equally
    Balanced,
}

/// Desire → archetype. `NotSure` has no entry.
const DESIRE_ARCHETYPES: [(CoreDesire, Archetype); 4] = [
    (CoreDesire::Breakthrough, Archetype::Dreamer),
    (CoreDesire::Relationships, Archetype::Lover),
    (CoreDesire::InformedDecisions, Archetype::Scholar),
    (CoreDesire::AchieveGoals, Archetype::Boss),
];

/// Fear → archetype. `NotSure` has no entry.
const FEAR_ARCHETYPES: [(CoreFear, Archetype); 4] = [
    (CoreFear::Plateauing, Archetype::Dreamer),
    (CoreFear::MissingConnections, Archetype::Lover),
    (CoreFear::WrongChoice, Archetype::Scholar),
    (CoreFear::WastingTime, Archetype::Boss),
];

impl CoreDesire {
    pub const ALL: [CoreDesire; 5] = [
        CoreDesire::Breakthrough,
        CoreDesire::Relationships,
        CoreDesire::InformedDecisions,
        CoreDesire::AchieveGoals,
        CoreDesire::NotSure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreDesire::Breakthrough => "breakthrough",
            CoreDesire::Relationships => "relationships",
            CoreDesire::InformedDecisions => "informed_decisions",
            CoreDesire::AchieveGoals => "achieve_goals",
            CoreDesire::NotSure => "not_sure",
        }
    }

    /// Archetype this desire points to, if any
    pub fn archetype(&self) -> Option<Archetype> {
        DESIRE_ARCHETYPES
            .iter()
            .find(|(desire, _)| desire == self)
            .map(|(_, archetype)| *archetype)
    }

    /// Lenient parse of a request field: trims, ignores case, and accepts
    /// `-` or a space for `_`. Unrecognized values carry no signal.
    pub fn from_wire(value: &str) -> Option<Self> {
        normalize(value).parse().ok()
    }
}

impl CoreFear {
    pub const ALL: [CoreFear; 5] = [
        CoreFear::Plateauing,
        CoreFear::MissingConnections,
        CoreFear::WrongChoice,
        CoreFear::WastingTime,
        CoreFear::NotSure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoreFear::Plateauing => "plateauing",
            CoreFear::MissingConnections => "missing_connections",
            CoreFear::WrongChoice => "wrong_choice",
            CoreFear::WastingTime => "wasting_time",
            CoreFear::NotSure => "not_sure",
        }
    }

    /// Archetype this fear points to, if any
    pub fn archetype(&self) -> Option<Archetype> {
        FEAR_ARCHETYPES
            .iter()
            .find(|(fear, _)| fear == self)
            .map(|(_, archetype)| *archetype)
    }

    /// Lenient parse of a request field: trims, ignores case, and accepts
    /// `-` or a space for `_`. Unrecognized values carry no signal.
    pub fn from_wire(value: &str) -> Option<Self> {
        normalize(value).parse().ok()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Exact wire name only. Use `from_wire` for request fields.
impl FromStr for CoreDesire {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoreDesire::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::UnknownVariant {
                field: "coreDesire",
                value: s.to_string(),
            })
    }
}

/// Exact wire name only. Use `from_wire` for request fields.
impl FromStr for CoreFear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoreFear::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownVariant {
                field: "coreFear",
                value: s.to_string(),
            })
    }
}

impl Archetype {
    /// Tie-break order. The first archetype at the maximum score wins.
    pub const PROFILED: [Archetype; 4] = [
        Archetype::Dreamer,
        Archetype::Lover,
        Archetype::Scholar,
        Archetype::Boss,
    ];

    pub const ALL: [Archetype; 5] = [
        Archetype::Dreamer,
        Archetype::Lover,
        Archetype::Scholar,
        Archetype::Boss,
        Archetype::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Dreamer => "dreamer",
            Archetype::Lover => "lover",
            Archetype::Scholar => "scholar",
            Archetype::Boss => "boss",
            Archetype::Balanced => "balanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Dreamer => "The Dreamer",
            Archetype::Lover => "The Lover",
            Archetype::Scholar => "The Scholar",
            Archetype::Boss => "The Boss",
            Archetype::Balanced => "Balanced",
        }
    }

    fn slot(&self) -> Option<usize> {
        Archetype::PROFILED.iter().position(|a| a == self)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-archetype scores for one request.
///
/// Indexed by [`Archetype::PROFILED`]. Each score is 0, 2, or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTable {
    scores: [u8; 4],
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for an archetype. `Balanced` is never scored.
    pub fn get(&self, archetype: Archetype) -> u8 {
        archetype.slot().map(|i| self.scores[i]).unwrap_or(0)
    }

    fn add(&mut self, archetype: Archetype, points: u8) {
        if let Some(i) = archetype.slot() {
            self.scores[i] += points;
        }
    }

    /// Scores in tie-break order
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, u8)> + '_ {
        Archetype::PROFILED.into_iter().zip(self.scores.iter().copied())
    }

    pub fn max(&self) -> u8 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u8 {
        self.scores.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

fn has_signal_desire(desire: Option<CoreDesire>) -> bool {
    matches!(desire, Some(d) if d != CoreDesire::NotSure)
}

fn has_signal_fear(fear: Option<CoreFear>) -> bool {
    matches!(fear, Some(f) if f != CoreFear::NotSure)
}

/// Score desire and fear against the four profiled archetypes.
pub fn score(desire: Option<CoreDesire>, fear: Option<CoreFear>) -> ScoreTable {
    let mut table = ScoreTable::new();

    if let Some(archetype) = desire.and_then(|d| d.archetype()) {
        table.add(archetype, SIGNAL_WEIGHT);
    }
    if let Some(archetype) = fear.and_then(|f| f.archetype()) {
        table.add(archetype, SIGNAL_WEIGHT);
    }

    table
}

/// Pick the winning archetype from a score table.
pub fn resolve(scores: &ScoreTable) -> Archetype {
    if scores.is_zero() {
        return Archetype::Balanced;
    }

    let max_score = scores.max();
    scores
        .iter()
        .find(|(_, s)| *s == max_score)
        .map(|(archetype, _)| archetype)
        .unwrap_or(Archetype::Balanced)
}

/// Classify a recipient from optional desire and fear signals.
pub fn classify(desire: Option<CoreDesire>, fear: Option<CoreFear>) -> Archetype {
    if !has_signal_desire(desire) && !has_signal_fear(fear) {
        return Archetype::Balanced;
    }

    resolve(&score(desire, fear))
}

/// Classification result carrying the intermediate scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationProfile {
    pub desire: Option<CoreDesire>,
    pub fear: Option<CoreFear>,
    pub scores: ScoreTable,
    pub archetype: Archetype,
}

impl MotivationProfile {
    pub fn from_signals(desire: Option<CoreDesire>, fear: Option<CoreFear>) -> Self {
        let scores = score(desire, fear);
        Self {
            desire,
            fear,
            scores,
            archetype: classify(desire, fear),
        }
    }

    pub fn summary(&self) -> String {
        let scores: Vec<_> = self
            .scores
            .iter()
            .map(|(a, s)| format!("{}={}", a.as_str(), s))
            .collect();

        format!(
            "Archetype: {} | desire: {} | fear: {} | scores: {}",
            self.archetype,
            self.desire.map(|d| d.as_str()).unwrap_or("none"),
            self.fear.map(|f| f.as_str()).unwrap_or("none"),
            scores.join(", ")
        )
    }
}

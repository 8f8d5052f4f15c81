use std::collections::{BTreeMap, HashMap};

use dvw_schema::{Match, Player, PlayerId, Quality, Skill, TeamSide};
use serde::{Deserialize, Serialize};

/// Outcome counters for one (player, skill) pair.
///
/// A closed record: exactly one counter per canonical quality code, one
/// `other` bucket for analyst shorthand, and `total`. `total` is maintained
/// as the sum of the six canonical counters only; `other` never feeds it,
/// and rates are methods rather than stored fields so there is no extra
/// field a sum could pick up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityDistribution {
    #[serde(rename = "#")]
    pub perfect: u32,
    #[serde(rename = "+")]
    pub positive: u32,
    #[serde(rename = "!")]
    pub exclamation: u32,
    #[serde(rename = "-")]
    pub negative: u32,
    #[serde(rename = "/")]
    pub poor: u32,
    #[serde(rename = "=")]
    pub error: u32,
    pub other: u32,
    pub total: u32,
}

impl QualityDistribution {
    pub fn record(&mut self, quality: Quality) {
        match quality {
            Quality::Perfect => self.perfect += 1,
            Quality::Positive => self.positive += 1,
            Quality::Exclamation => self.exclamation += 1,
            Quality::Negative => self.negative += 1,
            Quality::Poor => self.poor += 1,
            Quality::Error => self.error += 1,
            Quality::Other(_) => {
                self.other += 1;
                return;
            }
        }
        self.total += 1;
    }

    pub fn count(&self, quality: Quality) -> u32 {
        match quality {
            Quality::Perfect => self.perfect,
            Quality::Positive => self.positive,
            Quality::Exclamation => self.exclamation,
            Quality::Negative => self.negative,
            Quality::Poor => self.poor,
            Quality::Error => self.error,
            Quality::Other(_) => self.other,
        }
    }

    /// Explicit sum of the six canonical counters. Always equals `total`.
    pub fn canonical_sum(&self) -> u32 {
        self.perfect + self.positive + self.exclamation + self.negative + self.poor + self.error
    }

    /// Share of `#` and `+` touches, `None` with no attempts.
    pub fn positive_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| f64::from(self.perfect + self.positive) / f64::from(self.total))
    }

    pub fn error_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| f64::from(self.error) / f64::from(self.total))
    }

    /// `(# - =) / total`, the standard efficiency formula.
    pub fn efficiency(&self) -> Option<f64> {
        (self.total > 0).then(|| {
            (f64::from(self.perfect) - f64::from(self.error)) / f64::from(self.total)
        })
    }
}

/// Per-player breakdown for one match. Read-only output; only players with
/// at least one scouted action get an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchStats {
    pub player_id: PlayerId,
    pub side: TeamSide,
    pub number: u8,
    pub name: String,
    pub by_skill: BTreeMap<Skill, QualityDistribution>,
}

impl PlayerMatchStats {
    pub fn skill(&self, skill: Skill) -> Option<&QualityDistribution> {
        self.by_skill.get(&skill)
    }

    pub fn attempts(&self) -> u32 {
        self.by_skill.values().map(|d| d.total).sum()
    }
}

/// Per-side roll-up of every player distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub side: TeamSide,
    pub code: String,
    pub name: String,
    pub by_skill: BTreeMap<Skill, QualityDistribution>,
}

/// Everything a report consumer needs in one serializable payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub players: Vec<PlayerMatchStats>,
    pub home: TeamTotals,
    pub visitor: TeamTotals,
}

/// Folds the match's action log into per-player, per-skill distributions.
///
/// Pure: the same `Match` always yields the same output, in first-appearance
/// order. A well-formed `Match` (the parser's postcondition) cannot fail to
/// aggregate; non-canonical quality codes land in the `other` bucket.
pub fn aggregate(m: &Match) -> Vec<PlayerMatchStats> {
    let roster = roster_lookup(m);

    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<PlayerMatchStats> = Vec::new();

    for event in &m.events {
        let slot = match order.get(event.player_id.as_str()) {
            Some(&slot) => slot,
            None => {
                let name = roster
                    .get(event.player_id.as_str())
                    .map(|p| p.display_name())
                    .unwrap_or_else(|| event.player_id.clone());
                stats.push(PlayerMatchStats {
                    player_id: event.player_id.clone(),
                    side: event.side,
                    number: event.number,
                    name,
                    by_skill: BTreeMap::new(),
                });
                order.insert(event.player_id.as_str(), stats.len() - 1);
                stats.len() - 1
            }
        };

        if !event.quality.is_canonical() {
            log::debug!(
                "bucketing non-canonical quality '{}' for {} under other",
                event.quality.symbol(),
                event.player_id
            );
        }
        stats[slot]
            .by_skill
            .entry(event.skill)
            .or_default()
            .record(event.quality);
    }

    stats
}

/// Per-skill roll-up for one side of the net.
pub fn team_totals(m: &Match, side: TeamSide) -> TeamTotals {
    let mut by_skill: BTreeMap<Skill, QualityDistribution> = BTreeMap::new();
    for event in m.events.iter().filter(|e| e.side == side) {
        by_skill.entry(event.skill).or_default().record(event.quality);
    }
    let team = m.team(side);
    TeamTotals {
        side,
        code: team.code.clone(),
        name: team.name.clone(),
        by_skill,
    }
}

pub fn report(m: &Match) -> MatchReport {
    MatchReport {
        players: aggregate(m),
        home: team_totals(m, TeamSide::Home),
        visitor: team_totals(m, TeamSide::Visitor),
    }
}

fn roster_lookup(m: &Match) -> HashMap<&str, &Player> {
    let mut lookup = HashMap::new();
    for player in m.home.players.iter().chain(m.visitor.players.iter()) {
        lookup.insert(player.id.as_str(), player);
    }
    lookup
}

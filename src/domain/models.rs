use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a single penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Goal,
    Saved,
    Out,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Goal, Outcome::Saved, Outcome::Out];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Goal => "goal",
            Outcome::Saved => "saved",
            Outcome::Out => "out",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goal" => Ok(Outcome::Goal),
            "saved" => Ok(Outcome::Saved),
            "out" => Ok(Outcome::Out),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// One recorded penalty, already normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub date: NaiveDateTime,
    pub shooter_name: String,
    pub keeper_name: String,
    pub status: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl EventRecord {
    /// Calendar day of the event as `YYYY-MM-DD`
    pub fn date_key(&self) -> String {
        self.date.date().format("%Y-%m-%d").to_string()
    }
}

/// Raw per-outcome counters (unweighted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub goals: u32,
    pub saved: u32,
    pub out: u32,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Goal => self.goals += 1,
            Outcome::Saved => self.saved += 1,
            Outcome::Out => self.out += 1,
        }
    }

    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Goal => self.goals,
            Outcome::Saved => self.saved,
            Outcome::Out => self.out,
        }
    }

    pub fn total(&self) -> u32 {
        self.goals + self.saved + self.out
    }
}

/// Role-agnostic leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorScore {
    pub name: String,
    pub score: f64,
    pub tally: OutcomeTally,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerScore {
    pub name: String,
    pub score: f64,
    pub goals: u32,
    pub saved: u32,
    pub out: u32,
}

impl From<ActorScore> for PlayerScore {
    fn from(actor: ActorScore) -> Self {
        Self {
            name: actor.name,
            score: actor.score,
            goals: actor.tally.goals,
            saved: actor.tally.saved,
            out: actor.tally.out,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeperScore {
    pub name: String,
    pub score: f64,
    pub goals_conceded: u32,
    pub saves: u32,
    pub outs: u32,
}

impl From<ActorScore> for KeeperScore {
    fn from(actor: ActorScore) -> Self {
        Self {
            name: actor.name,
            score: actor.score,
            goals_conceded: actor.tally.goals,
            saves: actor.tally.saved,
            outs: actor.tally.out,
        }
    }
}

/// Share of one outcome in an actor's record (pie chart slice)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeShare {
    pub status: Outcome,
    pub count: u32,
    pub percentage: u32,
}

/// Month selector entry, e.g. `2025-03` / `March 2025`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_parsing_is_case_insensitive() {
        assert_eq!(" GOAL ".parse::<Outcome>(), Ok(Outcome::Goal));
        assert_eq!("Saved".parse::<Outcome>(), Ok(Outcome::Saved));
        assert_eq!("out".parse::<Outcome>(), Ok(Outcome::Out));
        assert!("post".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_keeper_view_inverts_counter_names() {
        let actor = ActorScore {
            name: "Kim".to_string(),
            score: 3.0,
            tally: OutcomeTally { goals: 1, saved: 2, out: 3 },
        };

        let keeper = KeeperScore::from(actor);

        assert_eq!(keeper.goals_conceded, 1);
        assert_eq!(keeper.saves, 2);
        assert_eq!(keeper.outs, 3);
    }
}

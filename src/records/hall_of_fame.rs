use chrono::NaiveDate;
use serde::Serialize;

use super::finders::{
    biggest_rivalry, busiest_day, longest_goal_streak, marathon_man, most_goals_in_session,
    most_saves_in_session, mysterious_ninja, recent_session, Attendance, BusiestDay, GoalStreak,
    RecentSession, Rivalry, SessionGoals, SessionSaves,
};
use crate::config::ScoringSettings;
use crate::domain::{EventRecord, KeeperScore, PlayerScore};
use crate::scoring::{top_keeper, top_player};

/// Everything the dashboard's records page shows, computed in one pass over the input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFame {
    pub top_player: Option<PlayerScore>,
    pub top_keeper: Option<KeeperScore>,
    pub longest_goal_streak: Option<GoalStreak>,
    pub most_goals_in_session: Option<SessionGoals>,
    pub most_saves_in_session: Option<SessionSaves>,
    pub marathon_man: Option<Attendance>,
    pub mysterious_ninja: Option<Attendance>,
    pub busiest_day: Option<BusiestDay>,
    pub biggest_rivalry: Option<Rivalry>,
    pub recent_session: Option<RecentSession>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    GoalStreak,
    MostGoals,
    MostSaves,
    MarathonMan,
    MysteriousNinja,
    BusiestDay,
    BiggestRivalry,
}

/// Flat, tagged form of a single record for table rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keeper_name: Option<String>,
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_count: Option<u32>,
}

impl RecordEntry {
    fn new(kind: RecordKind, value: u32) -> Self {
        Self {
            kind,
            player_name: None,
            keeper_name: None,
            value,
            date: None,
            session_count: None,
        }
    }
}

pub fn hall_of_fame(records: &[EventRecord], settings: &ScoringSettings) -> HallOfFame {
    HallOfFame {
        top_player: top_player(records, settings),
        top_keeper: top_keeper(records, settings),
        longest_goal_streak: longest_goal_streak(records),
        most_goals_in_session: most_goals_in_session(records),
        most_saves_in_session: most_saves_in_session(records),
        marathon_man: marathon_man(records),
        mysterious_ninja: mysterious_ninja(records),
        busiest_day: busiest_day(records),
        biggest_rivalry: biggest_rivalry(records),
        recent_session: recent_session(records),
    }
}

impl HallOfFame {
    /// Records that exist, in display order
    pub fn records(&self) -> Vec<RecordEntry> {
        let mut entries = Vec::new();

        if let Some(s) = &self.longest_goal_streak {
            entries.push(RecordEntry {
                player_name: Some(s.player_name.clone()),
                date: Some(s.date),
                ..RecordEntry::new(RecordKind::GoalStreak, s.streak)
            });
        }
        if let Some(g) = &self.most_goals_in_session {
            entries.push(RecordEntry {
                player_name: Some(g.player_name.clone()),
                date: Some(g.date),
                ..RecordEntry::new(RecordKind::MostGoals, g.goals)
            });
        }
        if let Some(s) = &self.most_saves_in_session {
            entries.push(RecordEntry {
                keeper_name: Some(s.keeper_name.clone()),
                date: Some(s.date),
                ..RecordEntry::new(RecordKind::MostSaves, s.saves)
            });
        }
        if let Some(a) = &self.marathon_man {
            entries.push(attendance_entry(RecordKind::MarathonMan, a));
        }
        if let Some(a) = &self.mysterious_ninja {
            entries.push(attendance_entry(RecordKind::MysteriousNinja, a));
        }
        if let Some(b) = &self.busiest_day {
            entries.push(RecordEntry {
                date: Some(b.date),
                ..RecordEntry::new(RecordKind::BusiestDay, b.penalty_count)
            });
        }
        if let Some(r) = &self.biggest_rivalry {
            entries.push(RecordEntry {
                player_name: Some(r.shooter_name.clone()),
                keeper_name: Some(r.keeper_name.clone()),
                ..RecordEntry::new(RecordKind::BiggestRivalry, r.encounters)
            });
        }

        entries
    }
}

fn attendance_entry(kind: RecordKind, attendance: &Attendance) -> RecordEntry {
    RecordEntry {
        player_name: Some(attendance.player_name.clone()),
        session_count: Some(attendance.session_count),
        ..RecordEntry::new(kind, attendance.session_count)
    }
}

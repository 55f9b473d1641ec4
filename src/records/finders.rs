use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::sessions::group_by_session;
use crate::domain::{EventRecord, OrderedGroups, Outcome, OutcomeTally};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStreak {
    pub player_name: String,
    pub streak: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGoals {
    pub player_name: String,
    pub goals: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSaves {
    pub keeper_name: String,
    pub saves: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub player_name: String,
    pub session_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusiestDay {
    pub date: NaiveDate,
    pub penalty_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rivalry {
    pub shooter_name: String,
    pub keeper_name: String,
    pub encounters: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentSession {
    pub date: NaiveDate,
    pub goals: u32,
    pub saves: u32,
    pub outs: u32,
}

/// Tracks the best value seen so far; only a strictly better value replaces it,
/// so the first actor to reach the final value wins.
struct Leader<T> {
    value: u32,
    best: Option<T>,
}

impl<T> Leader<T> {
    fn new() -> Self {
        Self { value: 0, best: None }
    }

    fn offer_max(&mut self, value: u32, candidate: impl FnOnce() -> T) {
        if value > self.value {
            self.value = value;
            self.best = Some(candidate());
        }
    }

    fn offer_min(&mut self, value: u32, candidate: impl FnOnce() -> T) {
        if self.best.is_none() || value < self.value {
            self.value = value;
            self.best = Some(candidate());
        }
    }

    fn finish(self) -> Option<(T, u32)> {
        let value = self.value;
        self.best.map(|best| (best, value))
    }
}

/// Longest run of consecutive goals by one shooter inside one session
pub fn longest_goal_streak(records: &[EventRecord]) -> Option<GoalStreak> {
    let mut leader = Leader::new();

    for (date, session) in group_by_session(records).iter() {
        let mut running: HashMap<&str, u32> = HashMap::new();

        for record in session {
            let counter = running.entry(record.shooter_name.as_str()).or_insert(0);
            if record.status == Outcome::Goal {
                *counter += 1;
                leader.offer_max(*counter, || (record.shooter_name.clone(), *date));
            } else {
                *counter = 0;
            }
        }
    }

    leader
        .finish()
        .map(|((player_name, date), streak)| GoalStreak { player_name, streak, date })
}

pub fn most_goals_in_session(records: &[EventRecord]) -> Option<SessionGoals> {
    most_in_session(records, Outcome::Goal, |r| &r.shooter_name)
        .map(|(player_name, goals, date)| SessionGoals { player_name, goals, date })
}

pub fn most_saves_in_session(records: &[EventRecord]) -> Option<SessionSaves> {
    most_in_session(records, Outcome::Saved, |r| &r.keeper_name)
        .map(|(keeper_name, saves, date)| SessionSaves { keeper_name, saves, date })
}

fn most_in_session(
    records: &[EventRecord],
    outcome: Outcome,
    actor: impl Fn(&EventRecord) -> &String,
) -> Option<(String, u32, NaiveDate)> {
    let mut leader = Leader::new();

    for (date, session) in group_by_session(records).iter() {
        let mut counts: HashMap<&str, u32> = HashMap::new();

        for record in session.iter().filter(|r| r.status == outcome) {
            let name = actor(*record);
            let count = counts.entry(name.as_str()).or_insert(0);
            *count += 1;
            leader.offer_max(*count, || (name.clone(), *date));
        }
    }

    leader
        .finish()
        .map(|((name, date), count)| (name, count, date))
}

/// Shooter who turned up on the most distinct days
pub fn marathon_man(records: &[EventRecord]) -> Option<Attendance> {
    let mut leader = Leader::new();
    for (name, days) in sessions_per_shooter(records).iter() {
        leader.offer_max(days.len() as u32, || name.to_string());
    }
    leader
        .finish()
        .map(|(player_name, session_count)| Attendance { player_name, session_count })
}

/// Shooter who turned up on the fewest distinct days
pub fn mysterious_ninja(records: &[EventRecord]) -> Option<Attendance> {
    let mut leader = Leader::new();
    for (name, days) in sessions_per_shooter(records).iter() {
        leader.offer_min(days.len() as u32, || name.to_string());
    }
    leader
        .finish()
        .map(|(player_name, session_count)| Attendance { player_name, session_count })
}

fn sessions_per_shooter(records: &[EventRecord]) -> OrderedGroups<&str, HashSet<NaiveDate>> {
    let mut attendance: OrderedGroups<&str, HashSet<NaiveDate>> = OrderedGroups::new();

    for (date, session) in group_by_session(records).iter() {
        for record in session {
            attendance
                .get_or_insert_with(record.shooter_name.as_str(), HashSet::new)
                .insert(*date);
        }
    }

    attendance
}

pub fn busiest_day(records: &[EventRecord]) -> Option<BusiestDay> {
    let mut leader = Leader::new();
    for (date, session) in group_by_session(records).iter() {
        leader.offer_max(session.len() as u32, || *date);
    }
    leader
        .finish()
        .map(|(date, penalty_count)| BusiestDay { date, penalty_count })
}

/// Most frequent shooter/keeper pairing across all records
pub fn biggest_rivalry(records: &[EventRecord]) -> Option<Rivalry> {
    let mut matchups: OrderedGroups<(&str, &str), u32> = OrderedGroups::new();

    for record in records {
        let key = (record.shooter_name.as_str(), record.keeper_name.as_str());
        *matchups.get_or_insert_with(key, || 0) += 1;
    }

    let mut leader = Leader::new();
    for (pair, &count) in matchups.iter() {
        leader.offer_max(count, || *pair);
    }

    leader.finish().map(|((shooter, keeper), encounters)| Rivalry {
        shooter_name: shooter.to_string(),
        keeper_name: keeper.to_string(),
        encounters,
    })
}

/// Outcome tallies of the latest session day
pub fn recent_session(records: &[EventRecord]) -> Option<RecentSession> {
    let sessions = group_by_session(records);
    let (date, session) = sessions.iter().max_by_key(|(date, _)| **date)?;

    let mut tally = OutcomeTally::default();
    for record in session {
        tally.record(record.status);
    }

    Some(RecentSession {
        date: *date,
        goals: tally.goals,
        saves: tally.saved,
        outs: tally.out,
    })
}

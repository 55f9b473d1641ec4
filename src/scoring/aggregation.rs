use log::debug;

use super::points::Role;
use super::weighting::{apply_time_decay, WeightedEvent};
use crate::config::ScoringSettings;
use crate::domain::{ActorScore, EventRecord, KeeperScore, OrderedGroups, OutcomeTally, PlayerScore};

#[derive(Debug, Default)]
struct RunningScore {
    score: f64,
    tally: OutcomeTally,
}

/// Time-weighted leaderboard for one role, best score first.
/// Weights are relative to the newest record in `records`, so filtering first changes them.
pub fn calculate_actor_scores(
    records: &[EventRecord],
    role: Role,
    settings: &ScoringSettings,
) -> Vec<ActorScore> {
    if records.is_empty() {
        return Vec::new();
    }

    // 1. Weight every record against the newest one in this set
    let weighted = apply_time_decay(records, settings.half_life_days);

    // 2. Fold into per-actor running totals, keeping first-seen order
    let totals = accumulate(&weighted, role);
    debug!("Scored {} {:?} actors from {} records", totals.len(), role, records.len());

    // 3. Round and rank
    rank(totals)
}

pub fn calculate_player_scores(records: &[EventRecord], settings: &ScoringSettings) -> Vec<PlayerScore> {
    calculate_actor_scores(records, Role::Shooter, settings)
        .into_iter()
        .map(PlayerScore::from)
        .collect()
}

pub fn calculate_keeper_scores(records: &[EventRecord], settings: &ScoringSettings) -> Vec<KeeperScore> {
    calculate_actor_scores(records, Role::Keeper, settings)
        .into_iter()
        .map(KeeperScore::from)
        .collect()
}

pub fn top_player(records: &[EventRecord], settings: &ScoringSettings) -> Option<PlayerScore> {
    calculate_player_scores(records, settings).into_iter().next()
}

pub fn top_keeper(records: &[EventRecord], settings: &ScoringSettings) -> Option<KeeperScore> {
    calculate_keeper_scores(records, settings).into_iter().next()
}

/// Rounds to cents, ties away from zero. Never returns `-0.0`.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0 + 0.0
}

fn actor_name(record: &EventRecord, role: Role) -> &str {
    match role {
        Role::Shooter => &record.shooter_name,
        Role::Keeper => &record.keeper_name,
    }
}

fn accumulate(weighted: &[WeightedEvent<'_>], role: Role) -> OrderedGroups<String, RunningScore> {
    let mut totals: OrderedGroups<String, RunningScore> = OrderedGroups::new();

    for event in weighted {
        let name = actor_name(event.record, role).to_string();
        let entry = totals.get_or_insert_with(name, RunningScore::default);

        entry.score += role.points(event.record.status) * event.weight;
        entry.tally.record(event.record.status);
    }

    totals
}

fn rank(totals: OrderedGroups<String, RunningScore>) -> Vec<ActorScore> {
    let mut scores: Vec<ActorScore> = totals
        .into_vec()
        .into_iter()
        .map(|(name, running)| ActorScore {
            name,
            score: round_score(running.score),
            tally: running.tally,
        })
        .collect();

    // sort_by is stable: equal scores keep first-seen order
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    fn event(shooter: &str, keeper: &str, status: Outcome, date: NaiveDateTime) -> EventRecord {
        EventRecord {
            id: format!("{shooter}-{keeper}-{date}"),
            date,
            shooter_name: shooter.to_string(),
            keeper_name: keeper.to_string(),
            status,
            remark: None,
            gender: None,
        }
    }

    #[test]
    fn test_goal_and_out_on_same_day() {
        let records = vec![
            event("A", "X", Outcome::Goal, day(10)),
            event("A", "X", Outcome::Out, day(10)),
        ];

        let scores = calculate_player_scores(&records, &ScoringSettings::default());

        assert_eq!(
            scores,
            vec![PlayerScore { name: "A".to_string(), score: 0.5, goals: 1, saved: 0, out: 1 }]
        );
    }

    #[test]
    fn test_only_goals_scale_linearly() {
        let records: Vec<EventRecord> = (0..7)
            .map(|_| event("A", "X", Outcome::Goal, day(3)))
            .collect();

        let scores = calculate_actor_scores(&records, Role::Shooter, &ScoringSettings::default());

        assert_eq!(scores[0].score, 1.5 * 7.0);
        assert_eq!(scores[0].tally.goals, 7);
    }

    #[test]
    fn test_keeper_points_invert() {
        let records = vec![
            event("A", "X", Outcome::Goal, day(5)),
            event("B", "X", Outcome::Saved, day(5)),
            event("C", "X", Outcome::Saved, day(5)),
            event("D", "Y", Outcome::Out, day(5)),
        ];

        let keepers = calculate_keeper_scores(&records, &ScoringSettings::default());

        assert_eq!(keepers[0].name, "X");
        assert_eq!(keepers[0].score, 2.0);
        assert_eq!(keepers[0].goals_conceded, 1);
        assert_eq!(keepers[0].saves, 2);
        assert_eq!(keepers[1].name, "Y");
        assert_eq!(keepers[1].score, 0.0);
        assert_eq!(keepers[1].outs, 1);
    }

    #[test]
    fn test_older_events_count_less() {
        let latest = day(20);
        let records = vec![
            event("Old", "X", Outcome::Goal, latest - Duration::days(45)),
            event("New", "X", Outcome::Goal, latest),
        ];

        let scores = calculate_player_scores(&records, &ScoringSettings::default());

        assert_eq!(scores[0].name, "New");
        assert_eq!(scores[0].score, 1.5);
        assert_eq!(scores[1].name, "Old");
        assert_eq!(scores[1].score, 0.75);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let records = vec![
            event("Zed", "X", Outcome::Saved, day(2)),
            event("Amy", "X", Outcome::Saved, day(2)),
            event("Bob", "X", Outcome::Goal, day(2)),
        ];

        let names: Vec<String> = calculate_player_scores(&records, &ScoringSettings::default())
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["Bob", "Zed", "Amy"]);
    }

    #[test]
    fn test_scores_rounding_to_zero_tie_with_zero() {
        let latest = day(20);
        let records = vec![
            event("Old", "X", Outcome::Out, latest - Duration::days(400)),
            event("Zero", "X", Outcome::Saved, latest),
        ];

        let scores = calculate_player_scores(&records, &ScoringSettings::default());
        let names: Vec<&str> = scores.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Old", "Zero"]);
        assert!(scores[0].score.is_sign_positive());
        assert!(serde_json::to_string(&scores[0]).unwrap().contains("\"score\":0.0"));
    }

    #[test]
    fn test_rounding_to_cents() {
        assert!(round_score(-0.001).is_sign_positive());
        assert_eq!(round_score(0.125), 0.13);
        assert_eq!(round_score(-0.125), -0.13);
        assert_eq!(round_score(1.004), 1.0);
    }

    #[test]
    fn test_empty_input() {
        let settings = ScoringSettings::default();

        assert!(calculate_player_scores(&[], &settings).is_empty());
        assert!(calculate_keeper_scores(&[], &settings).is_empty());
        assert_eq!(top_player(&[], &settings), None);
        assert_eq!(top_keeper(&[], &settings), None);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let records = vec![
            event("A", "X", Outcome::Goal, day(1)),
            event("B", "Y", Outcome::Out, day(9)),
            event("A", "Y", Outcome::Saved, day(15)),
        ];
        let settings = ScoringSettings::default();

        assert_eq!(
            calculate_player_scores(&records, &settings),
            calculate_player_scores(&records, &settings)
        );
        assert_eq!(
            calculate_keeper_scores(&records, &settings),
            calculate_keeper_scores(&records, &settings)
        );
    }

    #[test]
    fn test_top_player_is_leaderboard_head() {
        let records = vec![
            event("A", "X", Outcome::Out, day(4)),
            event("B", "X", Outcome::Goal, day(4)),
        ];

        let top = top_player(&records, &ScoringSettings::default()).unwrap();

        assert_eq!(top.name, "B");
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::{KeeperScore, PlayerScore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerMetric {
    #[default]
    Score,
    Goals,
    Saved,
    Out,
}

impl PlayerMetric {
    fn read(&self, player: &PlayerScore) -> f64 {
        match self {
            PlayerMetric::Score => player.score,
            PlayerMetric::Goals => f64::from(player.goals),
            PlayerMetric::Saved => f64::from(player.saved),
            PlayerMetric::Out => f64::from(player.out),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeeperMetric {
    #[default]
    Score,
    Saves,
    GoalsConceded,
    Outs,
}

impl KeeperMetric {
    fn read(&self, keeper: &KeeperScore) -> f64 {
        match self {
            KeeperMetric::Score => keeper.score,
            KeeperMetric::Saves => f64::from(keeper.saves),
            KeeperMetric::GoalsConceded => f64::from(keeper.goals_conceded),
            KeeperMetric::Outs => f64::from(keeper.outs),
        }
    }

    fn higher_is_better(&self) -> bool {
        !matches!(self, KeeperMetric::GoalsConceded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMark {
    Best,
    Worst,
    Neutral,
}

/// One bar of a side-by-side comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub name: String,
    pub value: f64,
    pub mark: RankMark,
}

/// Selected players in leaderboard order, with best and worst marked for `metric`.
/// Every player metric counts higher as better, the miss count included.
pub fn compare_players(scores: &[PlayerScore], names: &[String], metric: PlayerMetric) -> Vec<ComparisonEntry> {
    let values = scores
        .iter()
        .filter(|p| names.contains(&p.name))
        .map(|p| (p.name.clone(), metric.read(p)))
        .collect();

    mark_extremes(values, true)
}

/// Keeper counterpart of `compare_players`; fewer goals conceded is better
pub fn compare_keepers(scores: &[KeeperScore], names: &[String], metric: KeeperMetric) -> Vec<ComparisonEntry> {
    let values = scores
        .iter()
        .filter(|k| names.contains(&k.name))
        .map(|k| (k.name.clone(), metric.read(k)))
        .collect();

    mark_extremes(values, metric.higher_is_better())
}

// Nothing is marked when every value is equal.
fn mark_extremes(values: Vec<(String, f64)>, higher_is_better: bool) -> Vec<ComparisonEntry> {
    let max = values.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let (best, worst) = if higher_is_better { (max, min) } else { (min, max) };

    values
        .into_iter()
        .map(|(name, value)| {
            let mark = if max == min {
                RankMark::Neutral
            } else if value == best {
                RankMark::Best
            } else if value == worst {
                RankMark::Worst
            } else {
                RankMark::Neutral
            };
            ComparisonEntry { name, value, mark }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: f64, goals: u32) -> PlayerScore {
        PlayerScore { name: name.to_string(), score, goals, saved: 0, out: 0 }
    }

    fn keeper(name: &str, goals_conceded: u32, saves: u32) -> KeeperScore {
        KeeperScore { name: name.to_string(), score: 0.0, goals_conceded, saves, outs: 0 }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_players_keep_leaderboard_order_and_skip_unselected() {
        let scores = vec![player("A", 3.0, 2), player("B", 1.5, 1), player("C", 0.5, 4)];

        let entries = compare_players(&scores, &names(&["C", "A"]), PlayerMetric::Score);

        assert_eq!(
            entries,
            vec![
                ComparisonEntry { name: "A".to_string(), value: 3.0, mark: RankMark::Best },
                ComparisonEntry { name: "C".to_string(), value: 0.5, mark: RankMark::Worst },
            ]
        );
    }

    #[test]
    fn test_middle_values_stay_neutral() {
        let scores = vec![player("A", 0.0, 5), player("B", 0.0, 3), player("C", 0.0, 1)];

        let marks: Vec<RankMark> = compare_players(&scores, &names(&["A", "B", "C"]), PlayerMetric::Goals)
            .into_iter()
            .map(|e| e.mark)
            .collect();

        assert_eq!(marks, vec![RankMark::Best, RankMark::Neutral, RankMark::Worst]);
    }

    #[test]
    fn test_equal_values_are_not_marked() {
        let scores = vec![player("A", 1.0, 2), player("B", 1.0, 2)];

        let entries = compare_players(&scores, &names(&["A", "B"]), PlayerMetric::Goals);

        assert!(entries.iter().all(|e| e.mark == RankMark::Neutral));
    }

    #[test]
    fn test_fewer_goals_conceded_is_best() {
        let scores = vec![keeper("X", 4, 1), keeper("Y", 1, 3)];
        let selected = names(&["X", "Y"]);

        let conceded = compare_keepers(&scores, &selected, KeeperMetric::GoalsConceded);
        assert_eq!(conceded[0].mark, RankMark::Worst);
        assert_eq!(conceded[1].mark, RankMark::Best);

        let saves = compare_keepers(&scores, &selected, KeeperMetric::Saves);
        assert_eq!(saves[0].mark, RankMark::Worst);
        assert_eq!(saves[1].mark, RankMark::Best);
    }

    #[test]
    fn test_no_selection_is_empty() {
        let scores = vec![keeper("X", 1, 1)];

        assert!(compare_keepers(&scores, &[], KeeperMetric::Score).is_empty());
    }
}

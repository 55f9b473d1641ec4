use anyhow::{bail, Result};
use colored::Colorize;
use log::info;

use crate::analysis::{filter_by_gender, filter_by_month, parse_month_key};
use crate::config::settings::AppConfig;
use crate::database::EventStore;
use crate::domain::{EventRecord, Gender};
use crate::records::{hall_of_fame, HallOfFame};
use crate::scoring::{calculate_keeper_scores, calculate_player_scores};

/// Which slice of the data a report covers
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub month: Option<String>,
    pub gender: Option<Gender>,
}

/// Prints leaderboards and records to the terminal
pub struct ReportService {
    store: EventStore,
    config: AppConfig,
}

impl ReportService {
    pub fn new(store: EventStore, config: AppConfig) -> Self {
        Self { store, config }
    }

    pub fn run(&self, filter: &ReportFilter) -> Result<()> {
        let records = self.load_filtered(filter)?;
        info!("Reporting on {} events", records.len());

        println!("{}", self.render(&records));
        Ok(())
    }

    pub fn load_filtered(&self, filter: &ReportFilter) -> Result<Vec<EventRecord>> {
        let mut records = self.store.list_all()?;

        if let Some(gender) = filter.gender {
            records = filter_by_gender(&records, gender);
        }

        if let Some(month) = filter.month.as_deref() {
            if !month.is_empty() && parse_month_key(month).is_none() {
                bail!("Invalid month '{}', expected YYYY-MM", month);
            }
            records = filter_by_month(&records, month);
        }

        Ok(records)
    }

    pub fn render(&self, records: &[EventRecord]) -> String {
        if records.is_empty() {
            return "No events recorded.".yellow().to_string();
        }

        let scoring = &self.config.scoring;
        let mut out = Vec::new();

        out.push(format!("{}", "Player leaderboard".bold().green()));
        for (rank, p) in calculate_player_scores(records, scoring).iter().enumerate() {
            out.push(format!(
                "{:>3}. {:<20} {:>8.2}  goals {:>3}  saved {:>3}  out {:>3}",
                rank + 1,
                p.name,
                p.score,
                p.goals,
                p.saved,
                p.out
            ));
        }

        out.push(String::new());
        out.push(format!("{}", "Keeper leaderboard".bold().green()));
        for (rank, k) in calculate_keeper_scores(records, scoring).iter().enumerate() {
            out.push(format!(
                "{:>3}. {:<20} {:>8.2}  saves {:>3}  conceded {:>3}  outs {:>3}",
                rank + 1,
                k.name,
                k.score,
                k.saves,
                k.goals_conceded,
                k.outs
            ));
        }

        out.push(String::new());
        out.push(format!("{}", "Hall of Fame".bold().cyan()));
        out.extend(render_hall(&hall_of_fame(records, scoring)));

        out.join("\n")
    }
}

fn render_hall(hall: &HallOfFame) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(s) = &hall.longest_goal_streak {
        lines.push(format!("  Longest streak:   {} ({} goals on {})", s.player_name, s.streak, s.date));
    }
    if let Some(g) = &hall.most_goals_in_session {
        lines.push(format!("  Most goals:       {} ({} on {})", g.player_name, g.goals, g.date));
    }
    if let Some(s) = &hall.most_saves_in_session {
        lines.push(format!("  Most saves:       {} ({} on {})", s.keeper_name, s.saves, s.date));
    }
    if let Some(a) = &hall.marathon_man {
        lines.push(format!("  Marathon Man:     {} ({} sessions)", a.player_name, a.session_count));
    }
    if let Some(a) = &hall.mysterious_ninja {
        lines.push(format!("  Mysterious Ninja: {} ({} sessions)", a.player_name, a.session_count));
    }
    if let Some(b) = &hall.busiest_day {
        lines.push(format!("  Busiest day:      {} ({} penalties)", b.date, b.penalty_count));
    }
    if let Some(r) = &hall.biggest_rivalry {
        lines.push(format!(
            "  Biggest rivalry:  {} vs {} ({} encounters)",
            r.shooter_name, r.keeper_name, r.encounters
        ));
    }
    if let Some(s) = &hall.recent_session {
        lines.push(format!(
            "  Last session:     {} ({} goals, {} saves, {} outs)",
            s.date, s.goals, s.saves, s.outs
        ));
    }

    lines
}

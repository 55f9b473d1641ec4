use chrono::NaiveDate;

use crate::domain::{EventRecord, OrderedGroups};

/// Records grouped by calendar day, in order of each day's first appearance
pub type Sessions<'a> = OrderedGroups<NaiveDate, Vec<&'a EventRecord>>;

pub fn group_by_session(records: &[EventRecord]) -> Sessions<'_> {
    let mut sessions = Sessions::new();

    for record in records {
        sessions
            .get_or_insert_with(record.date.date(), Vec::new)
            .push(record);
    }

    sessions
}

/// `YYYY-MM-DD` key of a session day
pub fn session_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;

    fn event(id: &str, date: &str) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            date: chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M").unwrap(),
            shooter_name: "A".to_string(),
            keeper_name: "X".to_string(),
            status: Outcome::Goal,
            remark: None,
            gender: None,
        }
    }

    #[test]
    fn test_same_day_different_times_share_a_session() {
        let records = vec![
            event("1", "2025-02-03 09:00"),
            event("2", "2025-01-10 12:00"),
            event("3", "2025-02-03 23:59"),
        ];

        let sessions = group_by_session(&records);
        let keys: Vec<String> = sessions.keys().map(|d| session_key(*d)).collect();

        assert_eq!(keys, vec!["2025-02-03", "2025-01-10"]);

        let first = sessions.get(&NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()).unwrap();
        let ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_input_has_no_sessions() {
        assert!(group_by_session(&[]).is_empty());
    }
}

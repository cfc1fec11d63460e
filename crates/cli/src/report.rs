// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON rendering of the reporting views.

use std::fmt::Write;

use apda_tab_persistence::{DebaterPerformanceRow, SampleDataSummary, TournamentDetailsRow};
use serde::Serialize;

/// Renders any serializable report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Renders `TournamentDetails` rows as an aligned text table.
#[must_use]
pub fn render_tournament_details(rows: &[TournamentDetailsRow]) -> String {
    if rows.is_empty() {
        return String::from("No tournaments.\n");
    }

    let name_width: usize =
        column_width("Tournament", rows.iter().map(|r| r.tournament_name.as_str()));

    let mut out: String = String::new();
    let _ = writeln!(
        out,
        "{:>6}  {:<name_width$}  {:<10}  {:>6}",
        "ID", "Tournament", "Date", "Rounds"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>6}  {:<name_width$}  {:<10}  {:>6}",
            row.tournament_id, row.tournament_name, row.tournament_date, row.number_of_rounds
        );
    }
    out
}

/// Renders `DebaterPerformanceOverview` rows as an aligned text table.
///
/// Averages are shown to two decimals; JSON output carries the raw value.
#[must_use]
pub fn render_performance(rows: &[DebaterPerformanceRow]) -> String {
    if rows.is_empty() {
        return String::from("No recorded performances.\n");
    }

    let debater_width: usize =
        column_width("Debater", rows.iter().map(|r| r.debater_name.as_str()));
    let tournament_width: usize =
        column_width("Tournament", rows.iter().map(|r| r.tournament_name.as_str()));

    let mut out: String = String::new();
    let _ = writeln!(
        out,
        "{:<debater_width$}  {:<tournament_width$}  {:>10}",
        "Debater", "Tournament", "Avg Speaks"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<debater_width$}  {:<tournament_width$}  {:>10.2}",
            row.debater_name, row.tournament_name, row.avg_speaks
        );
    }
    out
}

/// One-line description of a seeded data set.
#[must_use]
pub fn render_sample_summary(summary: &SampleDataSummary) -> String {
    format!(
        "Loaded {} tournament(s), {} round(s), {} team(s), {} debater(s), {} judge(s), {} user(s), {} performance(s)\n",
        summary.tournament_ids.len(),
        summary.round_ids.len(),
        summary.team_ids.len(),
        summary.debater_ids.len(),
        summary.judge_ids.len(),
        summary.user_ids.len(),
        summary.performance_ids.len(),
    )
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .fold(header.chars().count(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn details_row(id: i64, name: &str, rounds: usize) -> TournamentDetailsRow {
        TournamentDetailsRow {
            tournament_id: id,
            tournament_name: name.to_string(),
            tournament_date: date!(2025 - 05 - 01),
            number_of_rounds: rounds,
        }
    }

    #[test]
    fn test_empty_reports_say_so() {
        assert_eq!(render_tournament_details(&[]), "No tournaments.\n");
        assert_eq!(render_performance(&[]), "No recorded performances.\n");
    }

    #[test]
    fn test_tournament_table_aligns_to_longest_name() {
        let rows = vec![
            details_row(1, "Test Cup", 2),
            details_row(2, "North American Championship", 0),
        ];

        let rendered = render_tournament_details(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Tournament"));
        assert!(lines[1].contains("2025-05-01"));
        assert_eq!(lines[1].len(), lines[2].len());
        assert!(lines[2].trim_end().ends_with('0'));
    }

    #[test]
    fn test_performance_table_rounds_average() {
        let rows = vec![DebaterPerformanceRow {
            debater_id: 1,
            debater_name: "Avery Chen".to_string(),
            tournament_id: 1,
            tournament_name: "Test Cup".to_string(),
            avg_speaks: 25.833_333,
        }];

        let rendered = render_performance(&rows);

        assert!(rendered.contains("25.83"));
        assert!(!rendered.contains("25.833"));
    }

    #[test]
    fn test_json_uses_iso_dates() {
        let json = to_json(&[details_row(1, "Test Cup", 2)]).unwrap();

        assert!(json.contains("\"tournament_date\": \"2025-05-01\""));
        assert!(json.contains("\"number_of_rounds\": 2"));
    }

    #[test]
    fn test_sample_summary_counts() {
        let summary = SampleDataSummary {
            tournament_ids: vec![1],
            round_ids: vec![1, 2],
            debater_ids: vec![1, 2, 3, 4],
            ..SampleDataSummary::default()
        };

        let rendered = render_sample_summary(&summary);

        assert!(
            rendered.starts_with("Loaded 1 tournament(s), 2 round(s), 0 team(s), 4 debater(s)")
        );
    }
}

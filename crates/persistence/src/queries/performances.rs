// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Performance queries.

use apda_tab_domain::Speaks;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::PerformanceData;
use crate::diesel_schema::performances;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = performances)]
struct PerformanceRow {
    performance_id: i64,
    debater_id: i64,
    round_id: i64,
    speaks: f64,
    feedback: Option<String>,
}

impl TryFrom<PerformanceRow> for PerformanceData {
    type Error = PersistenceError;

    fn try_from(row: PerformanceRow) -> Result<Self, Self::Error> {
        let speaks: Speaks =
            Speaks::new(row.speaks).map_err(|e| PersistenceError::InvalidData(e.to_string()))?;

        Ok(Self {
            performance_id: row.performance_id,
            debater_id: row.debater_id,
            round_id: row.round_id,
            speaks,
            feedback: row.feedback,
        })
    }
}

backend_fn! {
/// Lists a debater's performances ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_performances_for_debater(
    conn: &mut _,
    debater_id: i64,
) -> Result<Vec<PerformanceData>, PersistenceError> {
    let rows: Vec<PerformanceRow> = performances::table
        .filter(performances::debater_id.eq(debater_id))
        .select(PerformanceRow::as_select())
        .order(performances::performance_id.asc())
        .load(conn)?;

    rows.into_iter().map(PerformanceData::try_from).collect()
}
}

backend_fn! {
/// Lists the performances recorded in a round ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_performances_for_round(
    conn: &mut _,
    round_id: i64,
) -> Result<Vec<PerformanceData>, PersistenceError> {
    let rows: Vec<PerformanceRow> = performances::table
        .filter(performances::round_id.eq(round_id))
        .select(PerformanceRow::as_select())
        .order(performances::performance_id.asc())
        .load(conn)?;

    rows.into_iter().map(PerformanceData::try_from).collect()
}
}

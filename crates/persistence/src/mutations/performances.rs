// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use apda_tab_domain::Speaks;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::performances;
use crate::error::PersistenceError;

backend_fn! {
/// Records a debater's speaker points for a round.
///
/// A debater may hold several performances in the same round; nothing
/// enforces one per round.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `debater_id` - The speaking debater
/// * `round_id` - The round spoken in
/// * `speaks` - Speaker points, already rounded to hundredths
/// * `feedback` - Optional free-text judge feedback
///
/// # Errors
///
/// Returns `ForeignKeyViolation` if the debater or round does not exist.
pub fn record_performance(
    conn: &mut _,
    debater_id: i64,
    round_id: i64,
    speaks: Speaks,
    feedback: Option<&str>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(performances::table)
        .values((
            performances::debater_id.eq(debater_id),
            performances::round_id.eq(round_id),
            performances::speaks.eq(speaks.value()),
            performances::feedback.eq(feedback),
        ))
        .execute(conn)?;

    let performance_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        performance_id,
        debater_id, round_id, "Recorded {} speaks", speaks
    );

    Ok(performance_id)
}
}

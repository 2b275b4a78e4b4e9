//! Read-only views of a store: activities and raw intervals.

use crate::db::pool::DbPool;
use crate::db::queries::{
    IntervalFilter, activity_names, find_activity_id, load_activities, load_intervals,
};
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::interval::Interval;
use crate::utils::table::Table;

pub struct InspectLogic;

impl InspectLogic {
    pub fn activities(pool: &DbPool) -> AppResult<Vec<Activity>> {
        load_activities(&pool.conn)
    }

    /// Raw intervals, optionally restricted to one activity and/or to the
    /// ones still open.
    pub fn intervals(
        pool: &DbPool,
        activity: Option<&str>,
        open_only: bool,
    ) -> AppResult<Vec<Interval>> {
        let activity_id = match activity {
            Some(name) => Some(find_activity_id(&pool.conn, name)?.ok_or_else(|| {
                AppError::UnknownActivity {
                    name: name.to_string(),
                    known: activity_names(&pool.conn).unwrap_or_default(),
                }
            })?),
            None => None,
        };

        load_intervals(
            &pool.conn,
            &IntervalFilter {
                activity_id,
                open_only,
            },
        )
    }

    pub fn activities_table(activities: &[Activity]) -> Table {
        let mut table = Table::new(&["ID", "ACTIVITY"]);
        for a in activities {
            table.add_row(vec![a.id.to_string(), a.name.clone()]);
        }
        table
    }

    pub fn intervals_table(intervals: &[Interval]) -> Table {
        let mut table = Table::new(&["ID", "ACTIVITY", "START", "STOP"]);
        for i in intervals {
            table.add_row(vec![
                i.id.to_string(),
                i.activity.clone().unwrap_or_else(|| "--".into()),
                i.start.clone().unwrap_or_else(|| "--".into()),
                i.stop.clone().unwrap_or_else(|| "--".into()),
            ]);
        }
        table
    }

    pub fn intervals_json(intervals: &[Interval]) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(intervals)?)
    }
}

//! Session tracker: open an interval, wait for the stop signal, close it.

use crate::db::pool::DbPool;
use crate::db::queries::{
    activity_names, close_interval, find_activity_id, insert_activity, insert_interval,
};
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::utils::clock::Clock;
use crate::utils::signal::StopSignal;
use crate::utils::time::{duration_between, format_timestamp};
use chrono::TimeDelta;

/// A running session. Carries the id of the interval it opened, so the
/// stop step closes exactly that row.
#[derive(Debug, Clone)]
pub struct Session {
    pub interval_id: i64,
    pub activity: Activity,
    pub start: String,
    /// The activity row was inserted by this session (`--new`).
    pub created: bool,
}

#[derive(Debug, Clone)]
pub struct CompletedSession {
    pub interval_id: i64,
    pub activity: Activity,
    pub start: String,
    pub stop: String,
    pub duration: TimeDelta,
}

pub struct SessionLogic;

impl SessionLogic {
    /// Resolve (or create, when `create` is set) the activity and open a new
    /// interval for it, all in one transaction.
    pub fn start(
        pool: &mut DbPool,
        name: &str,
        create: bool,
        clock: &dyn Clock,
    ) -> AppResult<Session> {
        pool.in_transaction(|tx| {
            let known = activity_names(tx)?;
            let exists = known.iter().any(|n| n == name);

            let created = match (exists, create) {
                (false, false) => {
                    return Err(AppError::UnknownActivity {
                        name: name.to_string(),
                        known,
                    });
                }
                (true, true) => return Err(AppError::ActivityAlreadyExists(name.to_string())),
                (false, true) => {
                    insert_activity(tx, name)?;
                    true
                }
                (true, false) => false,
            };

            let activity_id =
                find_activity_id(tx, name)?.ok_or_else(|| AppError::UnknownActivity {
                    name: name.to_string(),
                    known: Vec::new(),
                })?;

            let start = format_timestamp(&clock.now());
            let interval_id = insert_interval(tx, activity_id, &start)?;

            Ok(Session {
                interval_id,
                activity: Activity {
                    id: activity_id,
                    name: name.to_string(),
                },
                start,
                created,
            })
        })
    }

    /// Close the session's interval with the current time.
    pub fn stop(
        pool: &mut DbPool,
        session: Session,
        clock: &dyn Clock,
    ) -> AppResult<CompletedSession> {
        let stop = format_timestamp(&clock.now());

        pool.in_transaction(|tx| {
            if close_interval(tx, session.interval_id, &stop)? {
                Ok(())
            } else {
                Err(AppError::IntervalNotOpen(session.interval_id))
            }
        })?;

        let duration = duration_between(&session.start, &stop)?;

        Ok(CompletedSession {
            interval_id: session.interval_id,
            activity: session.activity,
            start: session.start,
            stop,
            duration,
        })
    }

    /// Full session: arm `signal`, start, report through `on_start`, block
    /// until the signal fires, then stop. If waiting fails the interval is
    /// still closed before the error is returned.
    pub fn track<F>(
        pool: &mut DbPool,
        name: &str,
        create: bool,
        clock: &dyn Clock,
        signal: &dyn StopSignal,
        on_start: F,
    ) -> AppResult<CompletedSession>
    where
        F: FnOnce(&DbPool, &Session),
    {
        let armed = signal.arm()?;
        let session = Self::start(pool, name, create, clock)?;
        on_start(&*pool, &session);

        match armed.wait() {
            Ok(()) => Self::stop(pool, session, clock),
            Err(e) => {
                Self::stop(pool, session, clock)?;
                Err(e)
            }
        }
    }
}

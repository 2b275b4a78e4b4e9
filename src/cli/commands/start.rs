use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, timer};
use crate::utils::clock::LocalClock;
use crate::utils::format_duration;
use crate::utils::signal::CtrlC;

/// Exit status after a session was stopped with Ctrl-C.
pub const INTERRUPTED_EXIT: i32 = 1;

/// Handle the `start` command: blocks until Ctrl-C, then returns the exit
/// status for the process.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<i32> {
    if let Commands::Start { activity, new } = cmd {
        let db_path = cfg.resolve_database()?;
        let mut pool = DbPool::open(&db_path)?;

        let done = SessionLogic::track(
            &mut pool,
            activity,
            *new,
            &LocalClock,
            &CtrlC,
            |pool, session| {
                if session.created {
                    ttlog_or_warn(
                        &pool.conn,
                        "add_activity",
                        &session.activity.name,
                        &format!("Activity #{} added", session.activity.id),
                    );
                }
                ttlog_or_warn(
                    &pool.conn,
                    "start",
                    &session.activity.name,
                    &format!(
                        "Interval #{} started at {}",
                        session.interval_id, session.start
                    ),
                );

                timer(format!(
                    "Timer started for activity '{}' at {}.",
                    session.activity.name, session.start
                ));
                info("Stop timer by pressing [CTRL] + [C].");
            },
        )?;

        let lasted = format_duration(done.duration);
        ttlog_or_warn(
            &pool.conn,
            "stop",
            &done.activity.name,
            &format!(
                "Interval #{} stopped at {} after {}",
                done.interval_id, done.stop, lasted
            ),
        );

        println!();
        timer(format!(
            "Timer stopped for activity '{}' at {}. The activity lasted {}.",
            done.activity.name, done.stop, lasted
        ));

        return Ok(INTERRUPTED_EXIT);
    }

    Ok(0)
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::StoreLogic;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - an empty SQLite database at `location` (activities + times tables)
///  - the side-record naming that database
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Init {
        location,
        overwrite,
    } = cmd
    {
        let record = cfg.side_record_path();
        let pool = StoreLogic::init(location, &record, *overwrite)?;

        ttlog_or_warn(
            &pool.conn,
            "init",
            location,
            &format!("Database initialized at {}", location),
        );

        success(format!("Database initialized at {}", location));
        info(format!("Side-record: {}", record.display()));
    }

    Ok(())
}

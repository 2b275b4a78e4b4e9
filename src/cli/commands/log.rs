use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Printing is also the default when `--print` is not given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { .. }) {
        let pool = DbPool::open(&cfg.resolve_database()?)?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}

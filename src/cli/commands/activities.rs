use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inspect::InspectLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Activities) {
        let pool = DbPool::open(&cfg.resolve_database()?)?;
        let activities = InspectLogic::activities(&pool)?;

        if activities.is_empty() {
            info("No activities yet. Add one with `timer start <name> --new`.");
            return Ok(());
        }

        print!("{}", InspectLogic::activities_table(&activities).render());
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inspect::InspectLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        activity,
        open,
        json,
    } = cmd
    {
        let pool = DbPool::open(&cfg.resolve_database()?)?;
        let intervals = InspectLogic::intervals(&pool, activity.as_deref(), *open)?;

        if *json {
            println!("{}", InspectLogic::intervals_json(&intervals)?);
            return Ok(());
        }

        if intervals.is_empty() {
            info("No intervals found.");
            return Ok(());
        }

        print!("{}", InspectLogic::intervals_table(&intervals).render());
    }

    Ok(())
}

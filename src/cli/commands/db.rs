use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info } = cmd {
        let db_path = cfg.resolve_database()?;
        let pool = DbPool::open(&db_path)?;

        //
        // 1) INFO (also the default when no flag is given)
        //
        if *info || !*check {
            stats::print_db_info(&pool.conn, &db_path)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            match stats::integrity_check(&pool.conn)? {
                None => println!("{}✔ Integrity check passed.{}\n", GREEN, RESET),
                Some(problem) => {
                    println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, problem)
                }
            }
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

            if result == "ok" {
                success("Database integrity: OK");
            } else {
                warning(format!("Database integrity check reported: {}", result));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized (VACUUM).");
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if !*check && !*vacuum && !*info {
            warning("Nothing to do: specify --check, --vacuum or --info.");
        }
    }

    Ok(())
}

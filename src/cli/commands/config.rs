use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?
            );
        }

        if *check {
            let findings = cfg.check();
            if findings.is_empty() {
                success("Configuration is sound.");
            } else {
                for f in findings {
                    warning(f);
                }
            }
        }

        if !*print_config && !*check {
            warning("Nothing to do: specify --print or --check.");
        }
    }

    Ok(())
}

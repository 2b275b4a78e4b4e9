use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        } else if path.exists() {
            println!("📄 Configuration file: {}", path.display());
        } else {
            println!(
                "📄 No configuration file at {}; using defaults.",
                path.display()
            );
        }
    }

    Ok(())
}

//! Config command handlers. These run without a backend session.

use parkdash_config::{Config, config_path, load_config, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let path = config_path();
            if path.exists() {
                return Err(CliError::Validation {
                    field: "config".into(),
                    reason: format!("config file already exists at {}", path.display()),
                });
            }
            save_config(&Config::default())?;
            if !global.quiet {
                eprintln!("Wrote default config to {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = load_config()?;
            let out = match global.output {
                OutputFormat::Table | OutputFormat::Plain => {
                    toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                        message: e.to_string(),
                    })?
                }
                ref other => output::render_single(other, &cfg, |_| String::new(), |_| String::new()),
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

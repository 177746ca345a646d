//! Command dispatch.

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand, ScreenArgs};
use crate::adapter::inbound::cli::{config, operator, rank, refresh, run, select, status};
use crate::error::Result;
use crate::port::inbound::operator::runtime::LogRequest;
use crate::port::inbound::operator::screen::ScreenRequest;

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns the first error of the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    let config_toml = operator::read_config_toml(&cli.config)?;
    operator::operator().init_logging(
        &config_toml,
        LogRequest {
            verbosity: cli.verbose,
            json: cli.json,
        },
    );

    match cli.command {
        Commands::Run(args) => run::execute(config_toml, &args).await,
        Commands::Refresh => refresh::execute(&config_toml).await,
        Commands::Status => status::execute(&config_toml),
        Commands::Rank(args) => rank::execute(&screen_request(config_toml, &args.screen), args.all),
        Commands::Select(args) => select::execute(&screen_request(config_toml, &args)).await,
        Commands::Config(ConfigCommand::Show) => config::execute_show(&config_toml),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(&cli.config, &config_toml)
        }
    }
}

/// Carry `--profile` and `--top` into a screening request.
#[must_use]
pub fn screen_request(config_toml: String, args: &ScreenArgs) -> ScreenRequest {
    ScreenRequest {
        config_toml,
        profile: args.profile,
        top_k: args.top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Profile;

    #[test]
    fn screen_args_become_request_overrides() {
        let args = ScreenArgs {
            profile: Some(Profile::Discovery),
            top: Some(4),
        };
        let request = screen_request("[decision]\npicks = 2\n".to_string(), &args);
        assert_eq!(request.profile, Some(Profile::Discovery));
        assert_eq!(request.top_k, Some(4));
        assert!(request.config_toml.contains("picks = 2"));
    }
}

use clap::Parser;
use tickerscope::adapter::inbound::cli::{command::Cli, dispatch, operator, output};
use tickerscope::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    let _ = operator::install(Box::new(Operator));

    if let Err(e) = dispatch::execute(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

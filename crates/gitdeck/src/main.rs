use clap::Parser;
use gitdeck::app::App;
use gitdeck::config::Cli;
use gitdeck::error::AppError;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    cli.init_logging()?;

    let mut app = App::sample();

    gitdeck::runtime::run(&mut app, cli.tick_rate())
}

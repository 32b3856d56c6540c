use clap::Parser;
use guessing_game::{GameSession, StdConsole, ThreadRngSource};

/// Terminal number-guessing game: three tries to find a number from 1 to 10.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();

    // Leave a farewell instead of a bare ^C when the player bails out mid-prompt
    ctrlc::set_handler(|| {
        eprintln!("\nthanks for playing");
        std::process::exit(0);
    })
    .expect("failed to set Ctrl+C handler");

    let mut session = GameSession::new();
    session.run(&mut ThreadRngSource::new(), &mut StdConsole)?;
    Ok(())
}

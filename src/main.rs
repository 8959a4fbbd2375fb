use log4rs;
use std::error::Error;
use subnet_quiz::{cli, QuizConfig, QuizSession};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    //
    log::info!("#Start main()");

    let config = match std::env::args().nth(1) {
        Some(path) => QuizConfig::from_file(&path)?,
        None => QuizConfig::from_env()?,
    };
    let mut session = QuizSession::new(&config);

    let stdin = std::io::stdin();
    let snapshot = cli::run(&mut session, stdin.lock(), config.show_binary)?;

    log::info!(
        "#End main() score={} attempts={} completed={}",
        snapshot.score,
        snapshot.total_attempts,
        snapshot.completed
    );
    Ok(())
}

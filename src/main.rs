use tracing::{error, info, warn};

use databoard::{open_board, Config, Post, Result};

fn main() {
    // Load configuration
    let config = match Config::load_with_env("databoard.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load databoard.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = databoard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        databoard::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    info!(
        "Data board for {} using {} storage",
        config.board.owner, config.board.storage
    );

    if let Err(e) = run(&config) {
        error!("Demo failed: {e}");
        std::process::exit(2);
    }
}

/// Drive a short session against the configured board.
fn run(config: &Config) -> Result<()> {
    let password = config.board.password.as_str();
    let mut board = open_board(config.board.storage, &config.board.owner, password)?;

    board.create_category("Funny", password)?;
    board.create_category("Pets", password)?;
    board.add_friend("Funny", password, "Sofia")?;

    let first = Post::new(board.owner(), "<A>", "Funny")?;
    let second = Post::new(board.owner(), "<B>", "Funny")?;
    let pet = Post::new(board.owner(), "<C>", "Pets")?;
    board.put(password, first.clone(), "Funny")?;
    board.put(password, second, "Funny")?;
    board.put(password, pet.clone(), "Pets")?;

    board.insert_like("Sofia", &first)?;
    if let Err(e) = board.insert_like("Sofia", &pet) {
        warn!("Like rejected: {e}");
    }

    let ranked = board.get_all_by_likes(password)?;
    for post in &ranked {
        info!(
            "{}",
            post.render(&config.display.timezone, &config.display.date_format)
        );
    }

    match serde_json::to_string_pretty(ranked.as_slice()) {
        Ok(json) => println!("{json}"),
        Err(e) => warn!("Could not serialize feed: {e}"),
    }
    Ok(())
}

use crate::config::{BookshelfConfig, CONFIG_FILE_NAME, StoreSettings};
use crate::error::BookshelfError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(settings: StoreSettings) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(BookshelfError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = BookshelfConfig {
        store: settings,
        server: Default::default(),
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;

    config.save(&config_path)?;

    println!(
        "{} bookshelf project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}

use clap::Subcommand;
use focustrack_core::{Config, Theme};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Set the theme
    Set {
        /// "light" or "dark"
        theme: String,
    },
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tracker = super::open_tracker(&config)?;

    match action {
        ThemeAction::Show => println!("{}", tracker.theme()?),
        ThemeAction::Set { theme } => {
            let theme: Theme = theme.parse()?;
            tracker.set_theme(theme)?;
            println!("theme set to {theme}");
        }
    }
    Ok(())
}

use clap::Subcommand;
use focustrack_core::Config;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Print the daily goal
    Show,
    /// Set the daily goal
    Set {
        /// Goal text
        text: String,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tracker = super::open_tracker(&config)?;

    match action {
        GoalAction::Show => match tracker.daily_goal()? {
            Some(goal) => println!("{goal}"),
            None => println!("(not set)"),
        },
        GoalAction::Set { text } => {
            if tracker.set_daily_goal(&text)? {
                println!("goal saved");
            } else {
                eprintln!("nothing saved: goal text is empty");
            }
        }
    }
    Ok(())
}

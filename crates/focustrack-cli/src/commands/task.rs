use clap::{Subcommand, ValueEnum};
use focustrack_core::{Config, TodoFilter};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text
        text: String,
    },
    /// Toggle a task's completion flag
    Done {
        /// Index from `task list`
        index: usize,
    },
    /// Delete a task
    Rm {
        /// Index from `task list`
        index: usize,
    },
    /// List tasks as JSON
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FilterArg {
    #[default]
    All,
    Open,
    Done,
}

impl From<FilterArg> for TodoFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => TodoFilter::All,
            FilterArg::Open => TodoFilter::Open,
            FilterArg::Done => TodoFilter::Done,
        }
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut tracker = super::open_tracker(&config)?;

    match action {
        TaskAction::Add { text } => match tracker.add_task(&text)? {
            Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            None => eprintln!("nothing added: task text is empty"),
        },
        TaskAction::Done { index } => match tracker.toggle_task(index)? {
            Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            None => eprintln!("no task at index {index}"),
        },
        TaskAction::Rm { index } => match tracker.remove_task(index)? {
            Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            None => eprintln!("no task at index {index}"),
        },
        TaskAction::List { filter } => {
            let items: Vec<serde_json::Value> = tracker
                .tasks(filter.into())
                .into_iter()
                .map(|(index, item)| {
                    serde_json::json!({
                        "index": index,
                        "text": item.text,
                        "done": item.done,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}

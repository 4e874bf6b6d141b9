pub mod config;
pub mod goal;
pub mod stats;
pub mod task;
pub mod theme;
pub mod timer;

use std::rc::Rc;

use focustrack_core::{Config, Database, Tracker};

/// Open the on-disk store and build the tracker every command drives.
pub(crate) fn open_tracker(config: &Config) -> Result<Tracker, Box<dyn std::error::Error>> {
    let store = Rc::new(Database::open()?);
    Ok(Tracker::new(store, config)?)
}

//! MapIntent-, MapCommand- und MapEvent-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;
mod map_event;

pub use command::MapCommand;
pub use intent::MapIntent;
pub use map_event::MapEvent;

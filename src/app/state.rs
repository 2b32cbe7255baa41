//! Map-Screen-State: zentrale Datenhaltung.

mod centering;
mod display;
mod map_screen_state;
mod view;

pub use centering::CenteringState;
pub use display::DisplaySettings;
pub use map_screen_state::MapScreenState;
pub use view::ViewState;

pub mod components;
pub mod global_state;
pub(crate) mod timers;

pub use components::results_list::ResultsList;
pub use components::search_panel::SearchPanel;

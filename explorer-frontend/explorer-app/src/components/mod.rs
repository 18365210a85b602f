pub mod loading;
pub mod quick_search;
pub mod results_list;
pub mod search_box;
pub mod search_form;
pub mod search_panel;
pub mod suggestion_panel;

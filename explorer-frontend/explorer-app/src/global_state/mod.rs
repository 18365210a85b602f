pub mod search_context;

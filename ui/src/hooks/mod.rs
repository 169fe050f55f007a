pub mod use_keyword_clipboard;
pub mod use_rate_refresh;
pub mod use_table_service;

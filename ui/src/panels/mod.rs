// The sections of the dashboard page.

pub mod chat;
pub mod data;
pub mod keywords;
pub mod rates;

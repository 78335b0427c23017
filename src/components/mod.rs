pub mod field_row;
pub mod footer;
pub mod modals;
pub mod suggestions;

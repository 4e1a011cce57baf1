pub mod galaxy;
pub mod report;
pub mod terminal;

pub mod current;
pub mod help;
pub mod list;
pub mod switch;

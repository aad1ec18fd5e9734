pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;
pub mod remind;

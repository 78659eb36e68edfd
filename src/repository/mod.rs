pub mod exists;
pub mod group;
pub mod schedule_item;
pub mod subject;
pub mod teacher;

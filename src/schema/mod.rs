pub mod common;
pub mod group;
pub mod schedule;
pub mod subject;
pub mod teacher;

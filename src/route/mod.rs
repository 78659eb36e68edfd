pub mod group;
#[cfg(test)]
mod group_test;
pub mod schedule;
pub mod subject;
pub mod teacher;

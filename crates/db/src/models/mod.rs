pub mod daily_task;
pub mod equipment;
pub mod material;
pub mod progress_entry;
pub mod project;
pub mod safety_checklist;
pub mod safety_incident;
pub mod task;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod timecard;

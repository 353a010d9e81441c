pub mod calendar;
pub mod filter_spec;
pub mod observation;
pub mod season;
pub mod visualization;

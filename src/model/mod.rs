mod match_record;
mod report;
mod statistic;

pub use match_record::*;
pub use report::*;
pub use statistic::*;

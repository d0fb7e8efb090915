pub mod progress;
pub mod review;
pub mod summarize;
pub mod validate;

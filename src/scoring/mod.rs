// Category scoring — keyword table and the scorer that reads it.

pub mod keywords;
pub mod scorer;

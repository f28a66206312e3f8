pub mod file_hits;
pub mod rate_limit;

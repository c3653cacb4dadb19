pub mod review;
pub mod scan;

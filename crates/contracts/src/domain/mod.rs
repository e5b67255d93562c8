pub mod a001_org;
pub mod a002_rank;
pub mod a003_user;
pub mod common;

pub mod db;
pub mod repository;
pub mod seed;

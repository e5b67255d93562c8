//! Общие типы фронтенда и бэкенда: агрегаты оргструктуры, DTO, конверт ответа API

pub mod domain;
pub mod shared;

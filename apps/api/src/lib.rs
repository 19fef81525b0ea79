pub mod config;
pub mod db;
pub mod errors;
pub mod interview;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

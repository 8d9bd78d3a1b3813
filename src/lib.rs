pub mod clock;
pub mod config;
pub mod data_fetch;
pub mod dataset;
pub mod picks;
pub mod results;
pub mod shuffle;
pub mod state;

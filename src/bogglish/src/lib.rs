pub mod config;
pub mod error;
pub mod game;

#[cfg(test)]
mod test_utils;

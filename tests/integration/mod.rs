mod config;
mod reward;

// Kiss - Keep It Simple Scripting
// Library exports

// Core modules
pub mod cli;
pub mod config;
pub mod exec;
pub mod github;
pub mod library;
pub mod search;

//! Main profile-sync impl lib

// Config
pub mod config;

// Commands and args
pub mod command;

// Small util bits
mod util;

// Various checks
mod check;

// The newest/local profile name markers
mod marker;

// Dealing with the storage server
mod server;

// The actual sync
pub mod sync;


// Shared test bits
#[cfg(test)]
mod testutil;

//! relay-search
//!
//! Terminal search screen over a federated relay network.
//!
//! Pure core (`model`, `state`) holds the query-lifecycle state machines;
//! the impure shell (`view`, `logging`, `config`) wires them to a terminal.
//! Collaborators the screen talks to live behind traits in `services`.

pub mod config;
pub mod logging;
pub mod model;
pub mod services;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

// Library interface for Snowfall
// This allows tests and external code to use Snowfall modules

pub mod config;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod producer;
pub mod server;
pub mod shutdown;
pub mod validation;
pub mod worker;

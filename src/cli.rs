//! CLI domain: parse, route and output only.
//! The engine does the work; this layer validates input and picks the mode.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;

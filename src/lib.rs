pub mod emit;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod resolve;
pub mod tree;
pub mod watch;

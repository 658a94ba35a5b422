pub mod engine;
pub mod expression;
mod lexer;
mod parsing;
pub mod trace;

pub use engine::*;
pub use expression::*;
pub use trace::*;

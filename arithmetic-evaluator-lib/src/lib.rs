pub mod interpreter;

pub use interpreter::error::ExpressionError;
pub use interpreter::evaluate;

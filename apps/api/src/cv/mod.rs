pub mod compiler;
pub mod handlers;
pub mod latex;

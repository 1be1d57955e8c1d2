pub mod structs;
pub mod rewriter;


pub use structs::{CandidateOrder, RewriteOptions, RewrittenText, Substitution};
pub use rewriter::PositivityRewriter;

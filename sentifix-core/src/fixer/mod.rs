pub mod analysis;
pub mod fixer;

#[cfg(test)]
mod tests;

pub use analysis::{Analysis, Outcome};
pub use fixer::Fixer;

pub mod earthquake;

pub use earthquake::Earthquake;

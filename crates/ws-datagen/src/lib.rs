pub mod catalog;
pub mod constants;
pub mod generator;
pub mod random;
pub mod series;
pub mod snapshot;

pub use generator::Generator;
pub use random::{ConstantSource, RandomSource, SeededSource};
pub use series::generate_series;

pub mod charset;
pub mod error;
pub mod generator;
pub mod random;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use error::GenerationError;
pub use generator::{generate, generate_with_os_rng, parse_length, GenerationRequest};
pub use random::{KeystreamSource, OsSource, RandomSource};
pub use strength::{assess, score, Strength};

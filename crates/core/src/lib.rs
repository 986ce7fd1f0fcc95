pub mod deployment;
pub mod error;
pub mod kindtrust;
pub mod mock;
pub mod organization;
pub mod provider;
pub mod registry;
pub mod seeder;
pub mod sink;

pub type Result<T> = std::result::Result<T, error::Error>;
pub use error::Error;
pub use organization::Organization;
pub use seeder::Seeder;

pub mod genres;
pub mod movies;
pub mod providers;

pub use genres::GenreResolver;
pub use providers::{MovieProvider, TmdbProvider};

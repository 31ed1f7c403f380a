pub mod content_repository;
pub mod player_repository;

pub use content_repository::ContentRepository;
pub use player_repository::PlayerRepository;

//! Influencer aggregate: write validation, transactional persistence of the
//! influencer row with its manager link and social accounts, and filtered reads.

pub mod domain;
pub mod validator;
pub mod repository;
pub mod repo;
pub mod service;

pub use repo::seaorm::SeaOrmInfluencerRepository;
pub use repository::InfluencerRepository;
pub use service::InfluencerService;

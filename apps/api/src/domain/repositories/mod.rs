// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod member_repository;
pub mod member_search_store;
pub mod team_repository;

pub use member_repository::MemberRepository;
pub use member_search_store::MemberSearchStore;
pub use team_repository::TeamRepository;

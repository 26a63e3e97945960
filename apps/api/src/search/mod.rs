// Member search
// Turns a sparse SearchCondition into store queries and pages

pub mod service;

pub use service::MemberSearchService;

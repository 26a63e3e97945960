// Infrastructure layer module
// Contains database adapters and startup data loading
// Follows Hexagonal Architecture

pub mod repositories;
pub mod seed;

//! Member Search API Library
//!
//! Members, teams, and a dynamic member search: optional filter fields are
//! folded into a left-joined predicate set and run either as a plain list
//! or as a page with a total count that is only queried when needed.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod search;

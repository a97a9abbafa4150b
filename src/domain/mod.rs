// Domain types for cdeps.

pub mod analysis;
pub mod config;
pub mod dependency;
pub mod language;

// Shared plumbing for cdeps.

pub mod error;

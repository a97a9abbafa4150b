// Serializable views of analysis results.

pub mod dto;

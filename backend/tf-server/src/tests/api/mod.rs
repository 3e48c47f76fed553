mod error;
mod extractors;
mod resolve;

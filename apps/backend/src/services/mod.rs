//! Application services built on top of the database layer

pub mod importer;

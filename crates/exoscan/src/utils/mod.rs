//! Platform plumbing shared by the components.

pub mod download;

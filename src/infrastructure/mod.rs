//! Infrastructure layer: concrete implementations of the domain's data
//! access traits, plus schema provisioning.

pub mod persistence;

//! Bond instrument definitions.

mod bond_spec;

pub use bond_spec::{BondSpec, BondSpecBuilder};

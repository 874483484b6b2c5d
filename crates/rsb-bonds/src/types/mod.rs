//! Bond classification types.

mod bond_kind;
mod payment_type;
mod term;

pub use bond_kind::BondKind;
pub use payment_type::PaymentType;
pub use term::Term;

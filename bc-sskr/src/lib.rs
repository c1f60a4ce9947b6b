//! Sharded Secret-Key Reconstruction (SSKR): splits a secret into groups of
//! shares so that only a threshold of groups, each supplying a threshold of
//! their own members, can recombine it. A two-level generalization of
//! Shamir secret sharing.

mod error;
pub use error::{Error, Result};

mod gf256;

mod shamir;

mod spec;
pub use spec::{GroupSpec, Spec};

mod share;
pub use share::Share;

mod sskr;
pub use sskr::{combine, split, split_with_rng};

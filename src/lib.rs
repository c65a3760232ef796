//! Calculatrice scientifique — noyau réutilisable.
//!
//! ```
//! use calculatrice_sci::evaluer;
//!
//! assert_eq!(evaluer("x^x", 8.0).unwrap(), 16_777_216.0);
//! assert!(evaluer("1/0", 0.0).unwrap().is_infinite());
//! assert!(evaluer("coss(6)", 0.0).is_err());
//! ```

pub mod noyau;

pub use noyau::{evaluer, ErreurEval};

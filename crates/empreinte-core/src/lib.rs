//! `empreinte-core` — Password-hash strategies and digest format classifiers.
//!
//! This crate is the audit target: zero I/O, zero async, zero framework
//! dependencies. All cryptographic computation is delegated to vetted
//! crates (`bcrypt`, `argon2`, `pbkdf2`, `rsa`); the logic here is the
//! strategy contract, the format recognition, and the parameter plumbing.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod strategy;

pub mod argon2;
pub mod bcrypt;
pub mod pbkdf2;
pub mod rsa;

pub mod format;

pub mod prehashed;

pub use error::HashError;
pub use format::{
    is_argon2, is_bcrypt, is_md5, is_password_hash, is_sha1, is_sha256, matches_format,
    HashFormat, ALL_FORMATS,
};
pub use prehashed::Prehashed;
pub use strategy::{Algorithm, HashStrategy};

pub use self::argon2::{Argon2Options, Argon2Params, Argon2Strategy};
pub use self::bcrypt::{BcryptOptions, BcryptParams, BcryptStrategy};
pub use self::pbkdf2::{Pbkdf2Digest, Pbkdf2Options, Pbkdf2Params, Pbkdf2Strategy};
pub use self::rsa::{decrypt, encrypt, generate_keypair, RsaKeyGenOptions, RsaKeyPair};

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! RSA-OAEP integration tests: fresh key pairs round-trip, foreign keys and
//! tampered ciphertexts fail with the generic operation error.

use empreinte_core::rsa::{decrypt, encrypt, generate_keypair, RsaKeyGenOptions};
use empreinte_core::HashError;

/// 1024-bit keys keep test keygen fast; production default stays 2048.
const TEST_OPTIONS: RsaKeyGenOptions = RsaKeyGenOptions {
    modulus_length: 1024,
};

#[test]
fn generated_pair_roundtrips_messages() {
    let pair = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");

    for message in [&b"m"[..], b"a longer message payload", b"\x00\x01\x02\xff"] {
        let ciphertext = encrypt(message, &pair.public_pem).expect("encrypt should succeed");
        let plaintext = decrypt(&ciphertext, &pair.private_pem).expect("decrypt should succeed");
        assert_eq!(plaintext.as_slice(), message);
    }
}

#[test]
fn two_generated_pairs_are_distinct() {
    let a = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    let b = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    assert_ne!(a.public_pem, b.public_pem);
    assert_ne!(*a.private_pem, *b.private_pem);
}

#[test]
fn foreign_private_key_cannot_decrypt() {
    let sender_target = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    let bystander = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");

    let ciphertext = encrypt(b"for one recipient only", &sender_target.public_pem)
        .expect("encrypt should succeed");

    let result = decrypt(&ciphertext, &bystander.private_pem);
    assert!(
        matches!(result, Err(HashError::Operation)),
        "foreign key should yield the generic operation error"
    );
}

#[test]
fn ciphertext_bitflips_fail_decryption() {
    let pair = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    let ciphertext = encrypt(b"integrity", &pair.public_pem).expect("encrypt should succeed");

    for index in [0, ciphertext.len() / 2, ciphertext.len() - 1] {
        let mut tampered = ciphertext.clone();
        tampered[index] ^= 0x01;
        let result = decrypt(&tampered, &pair.private_pem);
        assert!(
            matches!(result, Err(HashError::Operation)),
            "bitflip at byte {index} should yield the generic operation error"
        );
    }
}

#[test]
fn public_key_cannot_be_used_as_private_key() {
    let pair = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    let ciphertext = encrypt(b"secret", &pair.public_pem).expect("encrypt should succeed");

    let result = decrypt(&ciphertext, &pair.public_pem);
    assert!(
        matches!(result, Err(HashError::Operation)),
        "an SPKI public PEM is not a PKCS#8 private key"
    );
}

#[test]
fn error_display_does_not_leak_detail() {
    let pair = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    let other = generate_keypair(&TEST_OPTIONS).expect("keygen should succeed");
    let ciphertext = encrypt(b"oracle probe", &pair.public_pem).expect("encrypt should succeed");

    let err = decrypt(&ciphertext, &other.private_pem).expect_err("decrypt should fail");
    assert_eq!(format!("{err}"), "asymmetric operation failed");
}

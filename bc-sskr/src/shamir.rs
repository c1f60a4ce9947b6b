//! Shamir secret sharing over GF(2^8), applied byte-wise across a secret
//! of arbitrary length. Each share is tagged with a nonzero one-byte index
//! (the x-coordinate); the secret lives at x=0.

use crate::gf256;
use bc_crypto::{RandomNumberGenerator, SecureRandomNumberGenerator};

/// Splits `secret` into `share_count` shares, any `threshold` of which
/// reconstruct it. Coefficients above the constant term are random; the
/// constant term is the secret byte itself.
pub fn split(secret: &[u8], threshold: u8, share_count: u8, indexes: &[u8]) -> Vec<Vec<u8>> {
    split_with_rng(secret, threshold, share_count, indexes, &mut SecureRandomNumberGenerator)
}

pub fn split_with_rng(
    secret: &[u8],
    threshold: u8,
    share_count: u8,
    indexes: &[u8],
    rng: &mut dyn RandomNumberGenerator,
) -> Vec<Vec<u8>> {
    assert_eq!(indexes.len(), share_count as usize);
    debug_assert!(indexes.iter().all(|&i| i != 0));

    if threshold == 1 {
        return indexes.iter().map(|_| secret.to_vec()).collect();
    }

    let degree = threshold as usize - 1;
    let mut coefficients: Vec<Vec<u8>> = Vec::with_capacity(secret.len());
    for &secret_byte in secret {
        let coeffs = rng.random_bytes(degree);
        let mut poly = Vec::with_capacity(threshold as usize);
        poly.push(secret_byte);
        poly.extend(coeffs);
        coefficients.push(poly);
    }

    indexes
        .iter()
        .map(|&x| {
            coefficients
                .iter()
                .map(|poly| eval_polynomial(poly, x))
                .collect()
        })
        .collect()
}

fn eval_polynomial(poly: &[u8], x: u8) -> u8 {
    let mut result = 0u8;
    for &coeff in poly.iter().rev() {
        result = gf256::add(gf256::mul(result, x), coeff);
    }
    result
}

/// Reconstructs the secret at x=0 from `shares`, each paired with its
/// x-coordinate in `indexes`, via Lagrange interpolation.
pub fn combine(indexes: &[u8], shares: &[Vec<u8>]) -> Vec<u8> {
    assert_eq!(indexes.len(), shares.len());
    assert!(!shares.is_empty());
    let len = shares[0].len();
    assert!(shares.iter().all(|s| s.len() == len));

    if indexes.len() == 1 {
        return shares[0].clone();
    }

    (0..len)
        .map(|byte_idx| {
            let points: Vec<(u8, u8)> = indexes
                .iter()
                .zip(shares.iter())
                .map(|(&x, share)| (x, share[byte_idx]))
                .collect();
            interpolate_at_zero(&points)
        })
        .collect()
}

fn interpolate_at_zero(points: &[(u8, u8)]) -> u8 {
    let mut result = 0u8;
    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut numerator = 1u8;
        let mut denominator = 1u8;
        for (j, &(xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = gf256::mul(numerator, xj);
            denominator = gf256::mul(denominator, gf256::add(xj, xi));
        }
        let term = gf256::mul(yi, gf256::div(numerator, denominator));
        result = gf256::add(result, term);
    }
    result
}

use std::collections::HashMap;

use bc_crypto::{RandomNumberGenerator, SecureRandomNumberGenerator};

use crate::error::{Error, Result};
use crate::shamir;
use crate::share::Share;
use crate::spec::Spec;

/// Splits `secret` according to `spec`, producing one inner `Vec<Share>`
/// per group (`result[g][m]` is group `g`'s `m`-th member share).
pub fn split(spec: &Spec, secret: &[u8]) -> Result<Vec<Vec<Share>>> {
    split_with_rng(spec, secret, &mut SecureRandomNumberGenerator)
}

pub fn split_with_rng(
    spec: &Spec,
    secret: &[u8],
    rng: &mut dyn RandomNumberGenerator,
) -> Result<Vec<Vec<Share>>> {
    if secret.len() < 16 || secret.len() > 32 || secret.len() % 2 != 0 {
        return Err(Error::InvalidSecretLength);
    }

    let identifier_bytes = rng.random_bytes(2);
    let identifier = u16::from_be_bytes([identifier_bytes[0], identifier_bytes[1]]);
    let group_count = spec.group_count();
    let group_threshold = spec.group_threshold();

    let group_indexes: Vec<u8> = (1..=group_count).collect();
    let group_secrets = shamir::split_with_rng(secret, group_threshold, group_count, &group_indexes, rng);

    let mut groups = Vec::with_capacity(spec.groups().len());
    for (g, group_spec) in spec.groups().iter().enumerate() {
        let group_secret = &group_secrets[g];
        let member_indexes: Vec<u8> = (1..=group_spec.member_count).collect();
        let member_values = shamir::split_with_rng(
            group_secret,
            group_spec.member_threshold,
            group_spec.member_count,
            &member_indexes,
            rng,
        );

        let shares = member_values
            .into_iter()
            .enumerate()
            .map(|(m, value)| Share {
                identifier,
                group_threshold,
                group_count,
                group_index: g as u8,
                member_threshold: group_spec.member_threshold,
                member_index: m as u8,
                value,
            })
            .collect();
        groups.push(shares);
    }

    Ok(groups)
}

/// Reconstructs the original secret from a flat pool of shares, so long as
/// it contains enough complete groups and enough members within each.
pub fn combine(shares: &[Share]) -> Result<Vec<u8>> {
    if shares.is_empty() {
        return Err(Error::NotEnoughGroups);
    }
    let identifier = shares[0].identifier;
    let group_threshold = shares[0].group_threshold;
    let value_len = shares[0].value.len();
    for share in shares {
        if share.identifier != identifier {
            return Err(Error::IdentifierMismatch);
        }
        if share.value.len() != value_len {
            return Err(Error::InconsistentShareLength);
        }
    }

    let mut by_group: HashMap<u8, Vec<&Share>> = HashMap::new();
    for share in shares {
        by_group.entry(share.group_index).or_default().push(share);
    }

    let mut group_secrets: Vec<(u8, Vec<u8>)> = Vec::new();
    for (group_index, group_shares) in by_group {
        let member_threshold = group_shares[0].member_threshold;
        let mut seen_members = HashMap::new();
        for share in &group_shares {
            seen_members.insert(share.member_index, share.value.clone());
        }
        if seen_members.len() < member_threshold as usize {
            continue;
        }
        let chosen: Vec<(u8, &Vec<u8>)> = seen_members
            .iter()
            .take(member_threshold as usize)
            .map(|(&idx, value)| (idx + 1, value))
            .collect();
        let indexes: Vec<u8> = chosen.iter().map(|(x, _)| *x).collect();
        let values: Vec<Vec<u8>> = chosen.iter().map(|(_, v)| (*v).clone()).collect();
        let group_secret = shamir::combine(&indexes, &values);
        group_secrets.push((group_index + 1, group_secret));
    }

    if group_secrets.len() < group_threshold as usize {
        return Err(Error::NotEnoughGroups);
    }
    group_secrets.truncate(group_threshold as usize);

    let indexes: Vec<u8> = group_secrets.iter().map(|(x, _)| *x).collect();
    let values: Vec<Vec<u8>> = group_secrets.into_iter().map(|(_, v)| v).collect();
    Ok(shamir::combine(&indexes, &values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::GroupSpec;
    use bc_crypto::TestRandomNumberGenerator;

    #[test]
    fn splits_and_combines_two_of_three_single_group() {
        let spec = Spec::new(1, vec![GroupSpec::new(2, 3).unwrap()]).unwrap();
        let secret = b"my secret belongs!".to_vec();
        assert_eq!(secret.len() % 2, 0);

        let mut rng = TestRandomNumberGenerator::new_with_seed(42);
        let groups = split_with_rng(&spec, &secret, &mut rng).unwrap();
        let group0 = &groups[0];
        assert_eq!(group0.len(), 3);

        let recovered = combine(&[group0[0].clone(), group0[2].clone()]).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn single_share_below_threshold_fails() {
        let spec = Spec::new(1, vec![GroupSpec::new(2, 3).unwrap()]).unwrap();
        let secret = b"0123456789abcdef".to_vec();
        let mut rng = TestRandomNumberGenerator::new_with_seed(7);
        let groups = split_with_rng(&spec, &secret, &mut rng).unwrap();
        let result = combine(&[groups[0][0].clone()]);
        assert!(result.is_err());
    }

    #[test]
    fn multi_group_threshold_recombines() {
        let spec = Spec::new(
            2,
            vec![
                GroupSpec::new(1, 1).unwrap(),
                GroupSpec::new(2, 3).unwrap(),
                GroupSpec::new(3, 5).unwrap(),
            ],
        )
        .unwrap();
        let secret = b"sharded secret!!".to_vec();
        let mut rng = TestRandomNumberGenerator::new_with_seed(99);
        let groups = split_with_rng(&spec, &secret, &mut rng).unwrap();

        let selected = vec![
            groups[0][0].clone(),
            groups[1][0].clone(),
            groups[1][1].clone(),
        ];
        let recovered = combine(&selected).unwrap();
        assert_eq!(recovered, secret);
    }
}

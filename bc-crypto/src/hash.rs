use sha2::{Digest, Sha256, Sha512};

pub const SHA256_SIZE: usize = 32;
pub const SHA512_SIZE: usize = 64;

pub fn sha256(data: impl AsRef<[u8]>) -> [u8; SHA256_SIZE] {
    let digest = Sha256::digest(data.as_ref());
    digest.into()
}

pub fn sha512(data: impl AsRef<[u8]>) -> [u8; SHA512_SIZE] {
    let digest = Sha512::digest(data.as_ref());
    digest.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty() {
        let digest = sha256(b"");
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b85"
        );
    }
}

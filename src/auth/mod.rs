pub mod session;

/// Password check the interpreter delegates /login to.
pub trait CredentialVerifier {
    fn verify(&self, plaintext: &str) -> bool;
}

/// Verifies against the bcrypt hash from configuration. With no hash
/// configured every attempt fails; the hash itself is never logged.
pub struct BcryptVerifier {
    hash: Option<String>,
}

impl BcryptVerifier {
    pub fn new(hash: Option<String>) -> Self {
        Self { hash }
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, plaintext: &str) -> bool {
        match &self.hash {
            Some(hash) => bcrypt::verify(plaintext, hash).unwrap_or(false),
            None => false,
        }
    }
}

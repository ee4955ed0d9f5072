#[cfg(test)]
mod tests {
    use studytrack::libs::password::{hash_password, hash_with_rounds, verify_password};

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_with_rounds("correct horse", 10);
        assert!(hash.starts_with("pbkdf2:sha256:10$"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("correct horse!", &hash));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let a = hash_with_rounds("secret", 10);
        let b = hash_with_rounds("secret", 10);
        assert_ne!(a, b);
        assert!(verify_password("secret", &a));
        assert!(verify_password("secret", &b));
    }

    #[test]
    fn test_default_rounds() {
        let hash = hash_password("pw");
        assert!(hash.starts_with("pbkdf2:sha256:100000$"));
        assert!(verify_password("pw", &hash));
    }

    #[test]
    fn test_known_pbkdf2_vector() {
        // RFC 7914 PBKDF2-HMAC-SHA256 ("passwd", "salt", c = 1), first 32 bytes
        let stored = "pbkdf2:sha256:1$salt$VawEblbjCJ/sFpHCJUS2BflBhSFt3gRl5oudV8INrLw=";
        assert!(verify_password("passwd", stored));
        assert!(!verify_password("password", stored));
    }

    #[test]
    fn test_malformed_hashes_never_verify() {
        for stored in [
            "",
            "plaintext",
            "pbkdf2:sha256:10$salt",
            "pbkdf2:md5:10$salt$aGFzaA==",
            "pbkdf2:sha256:ten$salt$aGFzaA==",
            "pbkdf2:sha256:0$salt$aGFzaA==",
            "pbkdf2:sha256:10$salt$not base64!",
            "pbkdf2:sha256:10$salt$aGFzaA==",
        ] {
            assert!(!verify_password("plaintext", stored), "accepted {:?}", stored);
        }
    }
}

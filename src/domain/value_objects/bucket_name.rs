use crate::domain::errors::ValidationError;

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 63;

/// A bucket name that satisfies S3-compatible naming rules
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = value.len();

        if len < MIN_LEN {
            return Err(ValidationError::BucketNameTooShort {
                actual: len,
                min: MIN_LEN,
            });
        }
        if len > MAX_LEN {
            return Err(ValidationError::BucketNameTooLong {
                actual: len,
                max: MAX_LEN,
            });
        }

        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.'))
        {
            return Err(ValidationError::BucketNameInvalidCharacter(c));
        }

        let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
        if !value.starts_with(is_alnum) || !value.ends_with(is_alnum) {
            return Err(ValidationError::BucketNameInvalidBoundary);
        }

        if value.contains("..") {
            return Err(ValidationError::BucketNameConsecutiveDots);
        }

        if value.parse::<std::net::Ipv4Addr>().is_ok() {
            return Err(ValidationError::BucketNameLooksLikeIpAddress);
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for BucketName {
    type Error = ValidationError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        BucketName::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bucket_names() {
        for name in ["toto", "my-bucket", "logs.example.com", "a1b", "0-bucket-9"] {
            assert!(BucketName::new(name).is_ok(), "expected {name} to be valid");
        }
    }

    #[test]
    fn test_invalid_bucket_names() {
        let cases = vec![
            ("ab", ValidationError::BucketNameTooShort { actual: 2, min: 3 }),
            (
                "Bucket",
                ValidationError::BucketNameInvalidCharacter('B'),
            ),
            ("my_bucket", ValidationError::BucketNameInvalidCharacter('_')),
            ("-bucket", ValidationError::BucketNameInvalidBoundary),
            ("bucket.", ValidationError::BucketNameInvalidBoundary),
            ("my..bucket", ValidationError::BucketNameConsecutiveDots),
            ("192.168.1.1", ValidationError::BucketNameLooksLikeIpAddress),
        ];

        for (name, expected) in cases {
            assert_eq!(BucketName::new(name), Err(expected), "case: {name}");
        }
    }

    #[test]
    fn test_bucket_name_too_long() {
        let name = "a".repeat(64);
        assert_eq!(
            BucketName::new(name),
            Err(ValidationError::BucketNameTooLong { actual: 64, max: 63 })
        );
    }

    #[test]
    fn test_display_round_trips_input() {
        let name = BucketName::try_from("toto").unwrap();
        assert_eq!(name.to_string(), "toto");
        assert_eq!(name.as_str(), "toto");
    }
}

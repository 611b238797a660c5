/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BucketNameTooShort { actual: usize, min: usize },
    BucketNameTooLong { actual: usize, max: usize },
    BucketNameInvalidCharacter(char),
    BucketNameInvalidBoundary,
    BucketNameConsecutiveDots,
    BucketNameLooksLikeIpAddress,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BucketNameTooShort { actual, min } => {
                write!(
                    f,
                    "Bucket name too short: {} characters (min: {})",
                    actual, min
                )
            }
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only lowercase letters, numbers, dots and hyphens allowed",
                    c
                )
            }
            ValidationError::BucketNameInvalidBoundary => {
                write!(
                    f,
                    "Bucket name must start and end with a lowercase letter or number"
                )
            }
            ValidationError::BucketNameConsecutiveDots => {
                write!(f, "Bucket name cannot contain consecutive dots")
            }
            ValidationError::BucketNameLooksLikeIpAddress => {
                write!(f, "Bucket name cannot be formatted as an IP address")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

use std::fmt;

/// The broad class an encoding failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KrbErrorKind {
    /// A mandatory member of a structure was never set.
    InvalidState,
    /// The destination buffer could not hold the encoding.
    BufferOverflow,
    /// Any other encoding failure.
    Encoding,
}

#[derive(Debug)]
pub enum KrbError {
    // =========================================================================================
    // The payloads here only ever name the ASN.1 structure and the sizes involved. Never put
    // field *values* into a variant, they can hold keys, ciphertext or principal names and
    // errors end up in userfacing contexts.
    //
    // If you want to debug the error, then use the error! macro at the error raise site to
    // report relevant information.
    // =========================================================================================
    InvalidState {
        structure: &'static str,
        field: &'static str,
    },
    BufferOverflow {
        structure: &'static str,
        required: usize,
        capacity: usize,
    },
    LengthMismatch {
        structure: &'static str,
        expected: usize,
        actual: usize,
    },
    MessageTooLarge {
        structure: &'static str,
        length: usize,
        limit: usize,
    },

    InvalidKerberosString,
    InvalidKerberosTime,
    InvalidMicroseconds,
    DerError(der::Error),

    ConfigParse,
    IoError,

    /// No really, do you have a time machine? How did you go back to before 1970?
    DoYouHaveATimeMachine,
}

impl KrbError {
    pub fn kind(&self) -> KrbErrorKind {
        match self {
            KrbError::InvalidState { .. } => KrbErrorKind::InvalidState,
            KrbError::BufferOverflow { .. } => KrbErrorKind::BufferOverflow,
            KrbError::LengthMismatch { .. }
            | KrbError::MessageTooLarge { .. }
            | KrbError::InvalidKerberosString
            | KrbError::InvalidKerberosTime
            | KrbError::InvalidMicroseconds
            | KrbError::DerError(_)
            | KrbError::ConfigParse
            | KrbError::IoError
            | KrbError::DoYouHaveATimeMachine => KrbErrorKind::Encoding,
        }
    }
}

impl fmt::Display for KrbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KrbError::InvalidState { structure, field } => {
                write!(f, "{structure}: required field '{field}' is not set")
            }
            KrbError::BufferOverflow {
                structure,
                required,
                capacity,
            } => write!(
                f,
                "{structure}: buffer overflow, {required} bytes required but capacity is {capacity}"
            ),
            KrbError::LengthMismatch {
                structure,
                expected,
                actual,
            } => write!(
                f,
                "{structure}: encoding disagrees with the computed lengths (expected {expected}, found {actual})"
            ),
            KrbError::MessageTooLarge {
                structure,
                length,
                limit,
            } => write!(
                f,
                "{structure}: encoding of {length} bytes exceeds the limit of {limit}"
            ),
            KrbError::InvalidKerberosString => f.write_str("invalid kerberos string"),
            KrbError::InvalidKerberosTime => f.write_str("invalid kerberos time"),
            KrbError::InvalidMicroseconds => f.write_str("microseconds outside of 0..=999999"),
            KrbError::DerError(err) => write!(f, "der: {err}"),
            KrbError::ConfigParse => f.write_str("unable to parse encoder configuration"),
            KrbError::IoError => f.write_str("i/o error"),
            KrbError::DoYouHaveATimeMachine => f.write_str("time is before the unix epoch"),
        }
    }
}

impl std::error::Error for KrbError {}

impl From<der::Error> for KrbError {
    fn from(value: der::Error) -> Self {
        KrbError::DerError(value)
    }
}

impl From<std::io::Error> for KrbError {
    fn from(value: std::io::Error) -> Self {
        tracing::error!(?value, "i/o failure");
        KrbError::IoError
    }
}

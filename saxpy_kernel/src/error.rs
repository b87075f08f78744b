use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire kernel crate.
pub type Result<T> = std::result::Result<T, KernelErr>;

/// The kernel's error type.
///
/// Every variant except `Spawn` is raised before any worker thread is created.
#[derive(Debug)]
pub enum KernelErr {
    InvalidPartitionCount,
    InvalidVectorLength {
        len: usize,
    },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    Spawn {
        worker: usize,
        source: io::Error,
    },
}

impl Display for KernelErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelErr::InvalidPartitionCount => {
                write!(f, "invalid partition count: at least one thread is required")
            }
            KernelErr::InvalidVectorLength { len } => write!(
                f,
                "invalid vector length {len}, expected a value in (0, {}]",
                crate::MAX_LEN
            ),
            KernelErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            KernelErr::Spawn { worker, source } => {
                write!(f, "failed to spawn worker {worker}: {source}")
            }
        }
    }
}

impl Error for KernelErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KernelErr::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_error_exposes_its_source() {
        let err = KernelErr::Spawn {
            worker: 3,
            source: io::Error::other("out of threads"),
        };

        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to spawn worker 3: out of threads");
    }

    #[test]
    fn validation_errors_have_no_source() {
        assert!(KernelErr::InvalidPartitionCount.source().is_none());
        assert!(KernelErr::InvalidVectorLength { len: 0 }.source().is_none());
    }
}

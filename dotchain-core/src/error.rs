//! Error types for matrix operations

/// A caller-supplied value outside its accepted range
///
/// Rejected before any bus traffic is issued; session state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// Brightness outside 0-15
    Brightness(i16),
    /// Chain length of zero or above `MAX_CHAIN_LEN`
    ChainLength(usize),
}

/// Errors returned by the controller session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError<E> {
    /// Argument rejected locally
    InvalidArgument(InvalidArgument),
    /// Underlying bus write failed
    Transport(E),
}

impl<E> From<InvalidArgument> for MatrixError<E> {
    fn from(err: InvalidArgument) -> Self {
        MatrixError::InvalidArgument(err)
    }
}

impl<E> MatrixError<E> {
    /// Check if this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, MatrixError::Transport(_))
    }
}

/// Failed session open
///
/// Hands the bus back so the caller can retry or reuse it.
#[derive(Debug)]
pub struct OpenError<T, E> {
    /// What went wrong
    pub error: MatrixError<E>,
    /// The transport, released by the session
    pub bus: T,
}

impl<T, E> OpenError<T, E> {
    /// Drop the bus and keep only the error
    pub fn into_error(self) -> MatrixError<E> {
        self.error
    }
}

//! Status codes crossing the controller ABI.
//!
//! Every exported entry point returns a MIDL `error_status_t`, a plain
//! 32-bit Win32/RPC status code. Zero is success; the interesting nonzero
//! values are the ones the RPC runtime itself produces when the screen
//! reader is absent or a call is torn down mid-flight.

use crate::error::ControllerError;

/// MIDL `error_status_t`: a Win32 status code, 0 on success.
pub type ErrorStatus = u32;

/// `ERROR_SUCCESS`.
pub const STATUS_OK: ErrorStatus = 0;

/// `RPC_S_SERVER_UNAVAILABLE`: the screen reader is not running, or the
/// forwarding slot behind an entry point has not been populated yet.
pub const RPC_S_SERVER_UNAVAILABLE: ErrorStatus = 1722;

/// `RPC_S_CALL_FAILED`: the call reached the server but did not complete.
pub const RPC_S_CALL_FAILED: ErrorStatus = 1726;

/// Map a raw ABI status to a typed result.
pub fn check(status: ErrorStatus) -> Result<(), ControllerError> {
    match status {
        STATUS_OK => Ok(()),
        RPC_S_SERVER_UNAVAILABLE => Err(ControllerError::NotRunning),
        other => Err(ControllerError::CallFailed { status: other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_success() {
        assert!(check(STATUS_OK).is_ok());
    }

    #[test]
    fn test_check_not_running() {
        assert!(matches!(
            check(RPC_S_SERVER_UNAVAILABLE),
            Err(ControllerError::NotRunning)
        ));
    }

    #[test]
    fn test_check_other_status() {
        assert!(matches!(
            check(RPC_S_CALL_FAILED),
            Err(ControllerError::CallFailed { status: 1726 })
        ));
    }
}

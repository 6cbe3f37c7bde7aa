use derive_more::From;
use orion_error::prelude::*;
use orion_error::{ErrorCode, StructError, UvsReason};
use ws_core::error::CoreReason;

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum RuntimeReason {
    #[error("bootstrap error")]
    Bootstrap,
    #[error("shutdown error")]
    Shutdown,
    #[error("session store error")]
    Session,
    #[error("injected fault")]
    InjectedFault,
    #[error("call cancelled")]
    Cancelled,
    #[error("{0}")]
    Core(CoreReason),
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for RuntimeReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::Bootstrap => 2001,
            Self::Shutdown => 2002,
            Self::Session => 2003,
            Self::InjectedFault => 2004,
            Self::Cancelled => 2005,
            Self::Core(c) => c.error_code(),
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type RuntimeError = StructError<RuntimeReason>;
pub type RuntimeResult<T> = Result<T, RuntimeError>;

pub(crate) fn validation(detail: impl Into<String>) -> RuntimeError {
    StructError::from(RuntimeReason::from(CoreReason::Validation)).with_detail(detail.into())
}

pub(crate) fn not_found(detail: impl Into<String>) -> RuntimeError {
    StructError::from(RuntimeReason::from(CoreReason::NotFound)).with_detail(detail.into())
}

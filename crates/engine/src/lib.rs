#![forbid(unsafe_code)]

//! The quiz game engine: session state machine, hint dispensing, and the
//! orchestration layer that couples live sessions to the saved-session
//! store. Matching, scoring, and models live in `quiz-core`.

pub mod config;
pub mod error;
pub mod session;
pub mod workflow;

pub use quiz_core::Clock;

pub use config::{SessionConfig, DEFAULT_TIME_LIMIT_SECS};
pub use error::SessionError;
pub use session::{GuessResult, QuizSession, SessionStatus, SessionView};
pub use workflow::QuizLoopService;

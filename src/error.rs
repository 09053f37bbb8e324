use ggez::GameError;
use log::SetLoggerError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    LoggerError(SetLoggerError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Self {
        Self(ErrorType::LoggerError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_outermost_first() {
    let res: Result = Err(GameError::CustomError("no window".to_string()).into());
    let err = res
        .with_trace_step("frame_mesh")
        .with_trace_step("App::draw")
        .unwrap_err();

    let text = format!("{:?}", err);
    let draw = text.find(" in App::draw").expect("missing outer step");
    let mesh = text.find(" in frame_mesh").expect("missing inner step");
    assert!(draw < mesh, "{}", text);
    assert!(text.contains("no window"), "{}", text);
}

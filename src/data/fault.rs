//! Error type for failures captured into a value.

use std::any::Any;

/// A failure captured by [`Outcome::catching`](super::Outcome::catching)
/// or converted from a foreign error.
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Fault;
///
/// let fault = Fault::new("disk full");
/// assert_eq!(format!("{fault}"), "fault: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fault {
    /// Human readable description of what went wrong.
    pub message: String,
}

impl Fault {
    /// Creates a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Captures the `Display` text of any error.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(error.to_string())
    }

    /// Builds a fault from a panic payload as returned by
    /// [`std::panic::catch_unwind`].
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything
    /// else is reported as an unknown panic.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self::new(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(message.clone())
        } else {
            Self::new("unknown panic")
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "fault: {}", self.message)
    }
}

impl std::error::Error for Fault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_display() {
        assert_eq!(Fault::new("boom").to_string(), "fault: boom");
    }

    #[test]
    fn fault_from_error_uses_display_text() {
        let error = "x".parse::<i32>().unwrap_err();
        assert_eq!(Fault::from_error(&error).message, error.to_string());
    }

    #[test]
    fn fault_from_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(Fault::from_panic(payload.as_ref()).message, "static message");
    }

    #[test]
    fn fault_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(Fault::from_panic(payload.as_ref()).message, "owned message");
    }

    #[test]
    fn fault_from_unknown_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(Fault::from_panic(payload.as_ref()).message, "unknown panic");
    }
}

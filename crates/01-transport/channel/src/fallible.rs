//! Tagged outcome values with tag-checked unwraps.
//!
//! [`Fallible`] holds either a success or an error payload; [`Maybe`] holds a value
//! or nothing. The tag is fixed at construction. Unwrapping against the wrong tag
//! raises [`IllegalUnwrap`], which marks a defect at the call site rather than a
//! condition to retry. Inspect the tag first, or use the `try_` forms.

use crate::error::IllegalUnwrap;

/// Tag carried by a [`Fallible`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallibleTag {
    Ok,
    Err,
}

impl FallibleTag {
    fn name(self) -> &'static str {
        match self {
            FallibleTag::Ok => "Ok",
            FallibleTag::Err => "Err",
        }
    }
}

/// Success-or-error value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fallible<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Fallible<T, E> {
    pub fn ok(value: T) -> Self {
        Fallible::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Fallible::Err(error)
    }

    pub fn tag(&self) -> FallibleTag {
        match self {
            Fallible::Ok(_) => FallibleTag::Ok,
            Fallible::Err(_) => FallibleTag::Err,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.tag() == FallibleTag::Ok
    }

    pub fn is_err(&self) -> bool {
        self.tag() == FallibleTag::Err
    }

    /// Returns the success payload, or [`IllegalUnwrap`] if the value is an error.
    pub fn try_unwrap_ok(self) -> Result<T, IllegalUnwrap> {
        match self {
            Fallible::Ok(value) => Ok(value),
            Fallible::Err(_) => Err(Self::mismatch(FallibleTag::Ok, FallibleTag::Err)),
        }
    }

    /// Returns the error payload, or [`IllegalUnwrap`] if the value is a success.
    pub fn try_unwrap_err(self) -> Result<E, IllegalUnwrap> {
        match self {
            Fallible::Err(error) => Ok(error),
            Fallible::Ok(_) => Err(Self::mismatch(FallibleTag::Err, FallibleTag::Ok)),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics with an [`IllegalUnwrap`] payload if the value is an error.
    #[track_caller]
    pub fn unwrap_ok(self) -> T {
        match self.try_unwrap_ok() {
            Ok(value) => value,
            Err(illegal) => illegal.raise(),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    /// Panics with an [`IllegalUnwrap`] payload if the value is a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(illegal) => illegal.raise(),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Fallible::Ok(value) => Ok(value),
            Fallible::Err(error) => Err(error),
        }
    }

    fn mismatch(expected: FallibleTag, found: FallibleTag) -> IllegalUnwrap {
        IllegalUnwrap::new(expected.name(), found.name())
    }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Fallible::Ok(value),
            Err(error) => Fallible::Err(error),
        }
    }
}

/// Tag carried by a [`Maybe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaybeTag {
    Some,
    None,
}

impl MaybeTag {
    fn name(self) -> &'static str {
        match self {
            MaybeTag::Some => "Some",
            MaybeTag::None => "None",
        }
    }
}

/// Present-or-absent value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    pub fn none() -> Self {
        Maybe::None
    }

    pub fn tag(&self) -> MaybeTag {
        match self {
            Maybe::Some(_) => MaybeTag::Some,
            Maybe::None => MaybeTag::None,
        }
    }

    pub fn is_some(&self) -> bool {
        self.tag() == MaybeTag::Some
    }

    pub fn is_none(&self) -> bool {
        self.tag() == MaybeTag::None
    }

    /// Returns the payload, or [`IllegalUnwrap`] when absent.
    pub fn try_unwrap(self) -> Result<T, IllegalUnwrap> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(IllegalUnwrap::new(
                MaybeTag::Some.name(),
                MaybeTag::None.name(),
            )),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    /// Panics with an [`IllegalUnwrap`] payload when absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(illegal) => illegal.raise(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

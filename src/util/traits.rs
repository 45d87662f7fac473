/// Allows any Sized type to functionally move itself into a Result<T, E>.
pub trait ResultExtensions
where
    Self: Sized,
{
    /// Converts the caller into an Ok (success) result value.
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    /// Converts the caller into an Err (failure) result value.
    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
impl<T> ResultExtensions for T {}

/// Allows any Sized type to functionally move itself into an Option<T>.
pub trait OptionExtensions
where
    Self: Sized,
{
    /// Converts the caller into a populated Option value.
    fn to_some(self) -> Option<Self> {
        Some(self)
    }
}
impl<T> OptionExtensions for T {}

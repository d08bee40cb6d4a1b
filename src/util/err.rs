/// Converts errors from their error type (of the submodule) to that of
/// an arrivo::Error variant.
///
/// ```rust,ignore
/// use arrivo::track::error::SourceError;
/// arrivo::impl_err!(SourceError, Source);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}

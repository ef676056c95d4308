//! String-like prompt values that may be absent.

use std::borrow::Cow;

/// Anything `validate_input`/`process` accept: a string, or an `Option` of one
/// where `None` stands for "no input".
pub trait TextInput {
    fn as_text(&self) -> Option<&str>;
}

impl TextInput for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextInput for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextInput for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextInput + ?Sized> TextInput for &T {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextInput> TextInput for Option<T> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|t| t.as_text())
    }
}

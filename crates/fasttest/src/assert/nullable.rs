/// Rendering of the null side of a null check.
pub(super) const NULL: &str = "null";

/// Values with a null state: `Option` and raw pointers.
pub trait Nullable {
    fn is_null_value(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }
}

pub(super) fn describe<N: Nullable>(value: &N) -> String {
    if value.is_null_value() {
        NULL.to_string()
    } else {
        "not null".to_string()
    }
}

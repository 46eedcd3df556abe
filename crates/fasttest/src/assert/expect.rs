use super::{
    Check,
    Expression,
};
use crate::failure::FailureKind;
use std::{
    any::{
        Any,
        type_name,
    },
    error::Error,
    panic::{
        self,
        AssertUnwindSafe,
    },
};

/// Whether `error` is a `K`, directly or inside a boxed trait object.
fn holds<K: Error + 'static>(error: &dyn Any) -> bool {
    if error.is::<K>() {
        true
    } else if let Some(boxed) = error.downcast_ref::<Box<dyn Error>>() {
        boxed.is::<K>()
    } else if let Some(boxed) = error.downcast_ref::<Box<dyn Error + Send>>() {
        boxed.is::<K>()
    } else if let Some(boxed) = error.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        boxed.is::<K>()
    } else {
        false
    }
}

impl<F, R, E> Expression<F>
where
    F: FnOnce() -> Result<R, E>,
    E: Any,
{
    /// Invoke the captured action and pass only if it fails with an error
    /// of type `K`, either returned or raised as a panic payload.
    ///
    /// Returned errors may be `K` itself or a boxed `dyn Error` holding it.
    pub fn expect_error<K: Error + 'static>(self) -> Check {
        let raised = match panic::catch_unwind(AssertUnwindSafe(self.value)) {
            Ok(Ok(_)) => false,
            Ok(Err(error)) => holds::<K>(&error),
            Err(payload) => holds::<K>(&*payload),
        };
        if raised {
            Ok(Expression::new(()))
        } else {
            let name = type_name::<K>();
            tracing::debug!(expected = name, "expected error was not raised");
            Err(Expression {
                value: (),
                message: self.message,
                location: self.location,
            }
            .failure(FailureKind::Exception, None, None)
            .with_expected_error(name))
        }
    }
}

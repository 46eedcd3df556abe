//! Source location capture for assertion messages

use derive_new::new;
use std::fmt;

/// A resolved `file:line function` triple.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SourceLocation {
    pub file: String,
    pub function: String,
    pub line: u32,
}

/// Optional source location attached to an assertion.
///
/// The default value is uninitialized and renders as an empty string, so
/// assertions that never call [`Expression::at`](crate::Expression::at)
/// produce plain messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInfo(Option<SourceLocation>);

impl LineInfo {
    pub fn new(
        file: impl Into<String>,
        function: impl Into<String>,
        line: u32,
    ) -> Self {
        Self(Some(SourceLocation::new(file.into(), function.into(), line)))
    }
    pub fn is_init(&self) -> bool {
        self.0.is_some()
    }
    pub fn location(&self) -> Option<&SourceLocation> {
        self.0.as_ref()
    }
}

impl fmt::Display for LineInfo {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.0 {
            Some(loc) => write!(f, "{}:{} {}", loc.file, loc.line, loc.function),
            None => Ok(()),
        }
    }
}

/// Name of the enclosing function, resolved at compile time.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        // closures show up as `{{closure}}` segments
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or("unknown")
    }};
}

/// [`LineInfo`] for the current file and line.
#[macro_export]
macro_rules! line_info {
    () => {
        $crate::LineInfo::new(file!(), "", line!())
    };
}

/// [`LineInfo`] for the current file, line and enclosing function.
#[macro_export]
macro_rules! line_info_f {
    () => {
        $crate::LineInfo::new(file!(), $crate::__function_name!(), line!())
    };
}

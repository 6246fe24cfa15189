//! Callable wrapper with an explicit arity

use crate::types::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Signature shared by every operation body
pub type OperationFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A reusable unit of work.
///
/// The arity is the number of arguments the body needs before it can run.
/// The chain builder compares it with the arguments supplied so far to
/// decide between partial application and execution.
#[derive(Clone)]
pub struct Operation {
    arity: usize,
    func: Arc<OperationFn>,
}

impl Operation {
    /// Operation over the raw argument slice.
    ///
    /// The slice always holds at least `arity` values; trailing extras are
    /// passed through untouched.
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            arity,
            func: Arc::new(func),
        }
    }

    pub fn unary<F, R>(func: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self::new(1, move |args| func(&args[0]).into())
    }

    pub fn binary<F, R>(func: F) -> Self
    where
        F: Fn(&Value, &Value) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self::new(2, move |args| func(&args[0], &args[1]).into())
    }

    pub fn ternary<F, R>(func: F) -> Self
    where
        F: Fn(&Value, &Value, &Value) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self::new(3, move |args| func(&args[0], &args[1], &args[2]).into())
    }

    /// Number of arguments the body declares
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Run the body. Missing arguments are filled with `Value::Null`.
    pub fn invoke(&self, args: &[Value]) -> Value {
        let args: Cow<'_, [Value]> = if args.len() >= self.arity {
            Cow::Borrowed(args)
        } else {
            let mut padded = args.to_vec();
            padded.resize(self.arity, Value::Null);
            Cow::Owned(padded)
        };

        (self.func)(&args)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

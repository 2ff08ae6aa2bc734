//! Font size state
//!
//! The effective size is the innermost scoped override if any, else the
//! default. Scoped overrides are entered through [`SizeScope`], a guard
//! that restores the stack when dropped, including during unwinding.

use std::ops::{Deref, DerefMut};

use crate::{Result, TextError};

/// Accept only finite, positive sizes
pub fn validate_size(size: f32) -> Result<f32> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(TextError::InvalidSize(size))
    }
}

/// Default size plus a stack of scoped overrides
#[derive(Debug, Clone, PartialEq)]
pub struct SizeStack {
    default: f32,
    /// Innermost last
    overrides: Vec<f32>,
}

impl SizeStack {
    pub fn new(default: f32) -> Result<Self> {
        Ok(Self {
            default: validate_size(default)?,
            overrides: Vec::new(),
        })
    }

    /// Replace the default size; affects later calls only
    pub fn set_default(&mut self, size: f32) -> Result<()> {
        self.default = validate_size(size)?;
        Ok(())
    }

    pub fn default_size(&self) -> f32 {
        self.default
    }

    pub fn effective(&self) -> f32 {
        self.overrides.last().copied().unwrap_or(self.default)
    }

    /// Number of active scoped overrides
    pub fn depth(&self) -> usize {
        self.overrides.len()
    }

    pub fn overrides(&self) -> &[f32] {
        &self.overrides
    }

    fn push(&mut self, size: f32) -> Result<()> {
        self.overrides.push(validate_size(size)?);
        Ok(())
    }

    fn restore(&mut self, depth: usize) {
        self.overrides.truncate(depth);
    }
}

/// Types that own a [`SizeStack`] and can host scoped overrides
pub trait SizeScoped {
    fn size_stack_mut(&mut self) -> &mut SizeStack;
}

impl SizeScoped for SizeStack {
    fn size_stack_mut(&mut self) -> &mut SizeStack {
        self
    }
}

/// An active scoped size override.
///
/// Derefs to the owner so calls inside the scope go through the guard.
/// Dropping it returns the stack to the depth it had on entry.
#[must_use = "the override ends as soon as the scope is dropped"]
pub struct SizeScope<'a, T: SizeScoped> {
    owner: &'a mut T,
    restore_depth: usize,
}

impl<'a, T: SizeScoped> SizeScope<'a, T> {
    pub fn enter(owner: &'a mut T, size: f32) -> Result<Self> {
        let stack = owner.size_stack_mut();
        let restore_depth = stack.depth();
        stack.push(size)?;
        tracing::trace!("Entered size scope {} at depth {}", size, restore_depth + 1);
        Ok(Self {
            owner,
            restore_depth,
        })
    }
}

impl<T: SizeScoped> Deref for SizeScope<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.owner
    }
}

impl<T: SizeScoped> DerefMut for SizeScope<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.owner
    }
}

impl<T: SizeScoped> Drop for SizeScope<'_, T> {
    fn drop(&mut self) {
        self.owner.size_stack_mut().restore(self.restore_depth);
    }
}

/// Run `body` with `size` as the innermost override.
///
/// The override is popped whether `body` returns `Ok`, `Err`, or panics.
pub fn with_scoped_override<T, R, E>(
    owner: &mut T,
    size: f32,
    body: impl FnOnce(&mut T) -> std::result::Result<R, E>,
) -> std::result::Result<R, E>
where
    T: SizeScoped,
    E: From<TextError>,
{
    let mut scope = SizeScope::enter(owner, size)?;
    body(&mut scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_effective() {
        let mut stack = SizeStack::new(12.0).unwrap();
        assert_eq!(stack.effective(), 12.0);
        stack.set_default(16.0).unwrap();
        assert_eq!(stack.effective(), 16.0);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(SizeStack::new(0.0), Err(TextError::InvalidSize(0.0)));
        let mut stack = SizeStack::new(12.0).unwrap();
        assert!(stack.set_default(-3.0).is_err());
        assert!(stack.set_default(f32::NAN).is_err());
        assert_eq!(stack.default_size(), 12.0);
        assert!(SizeScope::enter(&mut stack, f32::INFINITY).is_err());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_nested_scopes() {
        let mut stack = SizeStack::new(12.0).unwrap();
        let result: Result<()> = with_scoped_override(&mut stack, 16.0, |s| {
            assert_eq!(s.effective(), 16.0);
            let inner: Result<()> = with_scoped_override(s, 20.0, |s| {
                assert_eq!(s.effective(), 20.0);
                Ok(())
            });
            inner?;
            assert_eq!(s.effective(), 16.0);
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(stack.effective(), 12.0);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_scope_pops_on_error() {
        let mut stack = SizeStack::new(12.0).unwrap();
        let result: Result<()> = with_scoped_override(&mut stack, 16.0, |s| {
            with_scoped_override(s, 8.0, |_| Err(TextError::InvalidSize(-1.0)))
        });
        assert!(result.is_err());
        assert_eq!(stack.effective(), 12.0);
        assert!(stack.overrides().is_empty());
    }

    #[test]
    fn test_scope_pops_on_panic() {
        let mut stack = SizeStack::new(12.0).unwrap();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = SizeScope::enter(&mut stack, 30.0).unwrap();
            panic!("body failed");
        }));
        assert!(outcome.is_err());
        assert_eq!(stack.effective(), 12.0);
    }

    #[test]
    fn test_default_change_inside_scope() {
        let mut stack = SizeStack::new(12.0).unwrap();
        {
            let mut scope = SizeScope::enter(&mut stack, 16.0).unwrap();
            scope.set_default(10.0).unwrap();
            assert_eq!(scope.effective(), 16.0);
        }
        assert_eq!(stack.effective(), 10.0);
    }
}

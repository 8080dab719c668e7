//! Per-thread subject bindings.
//!
//! Every `Matcher::test` pushes its subject for the duration of the call and
//! pops it when the returned guard drops, including on unwind. Nested
//! evaluations (a comparator inside `sorted_by` that runs its own match, say)
//! push and pop their own entries, so the enclosing binding is visible again
//! as soon as they return. Each thread has its own stack.
//!
//! The stack exists for standalone boolean coercion (`Matcher::to_bool`);
//! matchers themselves receive the subject as a parameter.

use std::cell::RefCell;
use std::marker::PhantomData;

use smallvec::SmallVec;
use smatch_value::Value;

thread_local! {
    static SUBJECTS: RefCell<SmallVec<[Value; 8]>> = RefCell::new(SmallVec::new());
}

/// Pops the binding pushed by [`bind`] when dropped.
///
/// `!Send`: a guard must be dropped on the thread that created it.
#[must_use = "the subject is unbound as soon as the guard is dropped"]
pub(crate) struct SubjectGuard {
    _not_send: PhantomData<*const ()>,
}

/// Push `subject` as the innermost binding of the current thread.
pub(crate) fn bind(subject: &Value) -> SubjectGuard {
    SUBJECTS.with(|stack| stack.borrow_mut().push(subject.clone()));
    SubjectGuard {
        _not_send: PhantomData,
    }
}

impl Drop for SubjectGuard {
    fn drop(&mut self) {
        // The thread-local may already be gone during thread teardown.
        let _ = SUBJECTS.try_with(|stack| stack.borrow_mut().pop());
    }
}

/// The innermost subject bound on this thread, if a match is in progress.
pub fn current_subject() -> Option<Value> {
    SUBJECTS.with(|stack| stack.borrow().last().cloned())
}

/// Number of subjects currently bound on this thread.
pub fn binding_depth() -> usize {
    SUBJECTS.with(|stack| stack.borrow().len())
}

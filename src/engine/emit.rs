//! Emit-capturing scope handed to actions.

use crate::core::Mealy;
use std::ops::{Deref, DerefMut};

/// Scope of a single action invocation.
///
/// Dereferences to the machine context, so actions read and update their own
/// fields directly, and collects whatever the action passes to
/// [`emit`](EmitScope::emit). A scope is created fresh for every invocation;
/// emits never carry over from one action to the next.
///
/// In streaming mode the collected tokens are yielded once the action
/// returns. In single-result mode the scope discards them.
pub struct EmitScope<'a, M: Mealy> {
    context: &'a mut M,
    emits: Option<&'a mut Vec<M::Output>>,
}

impl<'a, M: Mealy> EmitScope<'a, M> {
    pub(crate) fn new(context: &'a mut M, emits: Option<&'a mut Vec<M::Output>>) -> Self {
        Self { context, emits }
    }

    /// Declare an output token.
    ///
    /// Tokens are yielded in the order they were emitted. Outside streaming
    /// mode this is a no-op.
    pub fn emit(&mut self, output: M::Output) {
        if let Some(emits) = self.emits.as_deref_mut() {
            emits.push(output);
        }
    }

    /// Whether emitted tokens are being collected.
    pub fn is_capturing(&self) -> bool {
        self.emits.is_some()
    }

    /// The machine context.
    pub fn context(&mut self) -> &mut M {
        &mut *self.context
    }
}

impl<M: Mealy> Deref for EmitScope<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        &*self.context
    }
}

impl<M: Mealy> DerefMut for EmitScope<'_, M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut *self.context
    }
}

//! Unidirectional state updates.

/// A state value evolved by messages.
///
/// - **Transition**: `reduce(&self, msg)` returns the next state. The current
///   value is never mutated; callers replace it with the returned one.
/// - **Effects**: side effects the transition asks for (start a fetch, cancel
///   one) are returned as data and carried out by a driver.
///
/// Implementations must not perform IO. Given the same state and message they
/// must return the same result.
pub trait Reducer: Clone {
    type Msg: core::fmt::Debug;
    type Effect: core::fmt::Debug;

    fn reduce(&self, msg: Self::Msg) -> (Self, Vec<Self::Effect>);

    /// Apply a sequence of messages, collecting every emitted effect in order.
    fn reduce_all<I>(&self, msgs: I) -> (Self, Vec<Self::Effect>)
    where
        I: IntoIterator<Item = Self::Msg>,
    {
        let mut state = self.clone();
        let mut effects = Vec::new();
        for msg in msgs {
            let (next, mut emitted) = state.reduce(msg);
            state = next;
            effects.append(&mut emitted);
        }
        (state, effects)
    }
}

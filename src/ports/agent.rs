//! Agent port - one decision per simulation step

/// Anything that picks an action for a state.
///
/// The external driver calls [`Agent::select_action`] once per step. `None`
/// means the state offers no action (a terminal or absorbing state); it is
/// never an error.
///
/// # Examples
///
/// ```
/// use pacai::ports::Agent;
///
/// /// Always counts up by one until ten.
/// struct Counter;
///
/// impl Agent<u32> for Counter {
///     type Action = u32;
///
///     fn select_action(&mut self, state: &u32) -> Option<u32> {
///         (*state < 10).then_some(1)
///     }
///
///     fn name(&self) -> &str {
///         "counter"
///     }
/// }
///
/// assert_eq!(Counter.select_action(&3), Some(1));
/// assert_eq!(Counter.select_action(&10), None);
/// ```
pub trait Agent<S> {
    type Action;

    /// Choose the action to take in `state`.
    fn select_action(&mut self, state: &S) -> Option<Self::Action>;

    /// Human-readable agent name for logs and reports.
    fn name(&self) -> &str;
}

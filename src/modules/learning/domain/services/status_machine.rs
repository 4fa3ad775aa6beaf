use crate::modules::learning::domain::value_objects::ItemStatus;

/// Whether a finished item may be reopened.
///
/// The permissive table allows `Done -> InProgress` (retraining/review);
/// the strict table treats `Done` as terminal. Product has not settled the
/// question, so both tables exist behind this one switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    Permissive,
    Strict,
}

/// Policy applied by all aggregate status updates.
pub const DEFAULT_TRANSITION_POLICY: TransitionPolicy = TransitionPolicy::Permissive;

/// Decides whether a transition between two item statuses is legal.
///
/// Stateless; transitions not enumerated here are illegal and surface as
/// `DomainError::IllegalTransition` at the aggregate.
pub struct StatusMachine;

impl StatusMachine {
    pub fn can_transition(from: ItemStatus, to: ItemStatus) -> bool {
        Self::can_transition_with(DEFAULT_TRANSITION_POLICY, from, to)
    }

    pub fn can_transition_with(policy: TransitionPolicy, from: ItemStatus, to: ItemStatus) -> bool {
        use ItemStatus::*;

        // Idempotent updates are always legal
        if from == to {
            return true;
        }

        match (from, to) {
            (Backlog, InProgress) => true,
            (Backlog, Paused) | (Backlog, Done) => false,

            (InProgress, Paused) | (InProgress, Done) | (InProgress, Backlog) => true,

            (Paused, InProgress) | (Paused, Backlog) => true,
            // Finishing requires passing through InProgress
            (Paused, Done) => false,

            (Done, InProgress) => policy == TransitionPolicy::Permissive,
            (Done, Backlog) | (Done, Paused) => false,

            // Self-transitions handled above
            (Backlog, Backlog) | (InProgress, InProgress) | (Paused, Paused) | (Done, Done) => true,
        }
    }
}

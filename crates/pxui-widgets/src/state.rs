#![forbid(unsafe_code)]

//! Focus/activation state machine.
//!
//! A node is `Idle`, `Focused`, or `Activated`. Transitions are total: an
//! input that doesn't apply in the current state is a no-op that returns
//! the state unchanged and no effects, which makes double-invocation safe
//! by construction.
//!
//! Transitions never perform side effects themselves. They return
//! [`Effect`] commands for the caller to execute, so the state logic can
//! be tested without a tree, a surface, or an audio backend.

use smallvec::SmallVec;

/// Interaction state of a single tree node.
///
/// `Activated` implies focused: the focus highlight logic treats an
/// activated node as still holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Not focused, not activated.
    #[default]
    Idle,
    /// Input navigation rests on this node.
    Focused,
    /// Focused and showing its action buttons.
    Activated,
}

/// Feedback sounds requested by transitions. Playback is external.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Sliding-open cue played on activation.
    Extend,
    /// Sliding-shut cue played on deactivation.
    Contract,
}

/// A side-effect command returned by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Play a feedback sound.
    PlaySound(SoundCue),
    /// Create the node's transient action buttons.
    SpawnButtons,
    /// Destroy all of the node's transient action buttons.
    ClearButtons,
}

/// The effect list produced by one transition. Never longer than two.
pub type Effects = SmallVec<[Effect; 2]>;

impl InteractionState {
    /// Whether this state carries focus.
    #[inline]
    #[must_use]
    pub const fn is_focused(self) -> bool {
        matches!(self, Self::Focused | Self::Activated)
    }

    /// Whether this state is activated.
    #[inline]
    #[must_use]
    pub const fn is_activated(self) -> bool {
        matches!(self, Self::Activated)
    }

    /// Input navigation lands on the node.
    #[must_use]
    pub fn focus(self) -> (Self, Effects) {
        match self {
            Self::Idle => (Self::Focused, Effects::new()),
            other => (other, Effects::new()),
        }
    }

    /// Explicit select input: reveal the action buttons.
    #[must_use]
    pub fn activate(self) -> (Self, Effects) {
        match self {
            Self::Focused => (
                Self::Activated,
                Effects::from_slice(&[Effect::PlaySound(SoundCue::Extend), Effect::SpawnButtons]),
            ),
            other => (other, Effects::new()),
        }
    }

    /// Leave activation, keeping focus.
    #[must_use]
    pub fn deactivate(self) -> (Self, Effects) {
        match self {
            Self::Activated => (
                Self::Focused,
                Effects::from_slice(&[
                    Effect::ClearButtons,
                    Effect::PlaySound(SoundCue::Contract),
                ]),
            ),
            other => (other, Effects::new()),
        }
    }

    /// Input navigation leaves the node.
    ///
    /// An activated node deactivates on the way out so its transient
    /// buttons are released deterministically.
    #[must_use]
    pub fn blur(self) -> (Self, Effects) {
        match self {
            Self::Idle => (Self::Idle, Effects::new()),
            Self::Focused => (Self::Idle, Effects::new()),
            Self::Activated => {
                let (_, effects) = Self::Activated.deactivate();
                (Self::Idle, effects)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Effect, InteractionState, SoundCue};

    // --- Happy-path transitions ---

    #[test]
    fn idle_focus_activates_nothing() {
        let (state, effects) = InteractionState::Idle.focus();
        assert_eq!(state, InteractionState::Focused);
        assert!(effects.is_empty());
    }

    #[test]
    fn focused_activate_spawns_buttons_and_plays_extend() {
        let (state, effects) = InteractionState::Focused.activate();
        assert_eq!(state, InteractionState::Activated);
        assert_eq!(
            effects.as_slice(),
            &[Effect::PlaySound(SoundCue::Extend), Effect::SpawnButtons]
        );
    }

    #[test]
    fn activated_deactivate_clears_buttons_then_plays_contract() {
        let (state, effects) = InteractionState::Activated.deactivate();
        assert_eq!(state, InteractionState::Focused);
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::ClearButtons,
                Effect::PlaySound(SoundCue::Contract)
            ]
        );
    }

    #[test]
    fn blur_from_activated_releases_buttons() {
        let (state, effects) = InteractionState::Activated.blur();
        assert_eq!(state, InteractionState::Idle);
        assert!(effects.contains(&Effect::ClearButtons));
        assert!(effects.contains(&Effect::PlaySound(SoundCue::Contract)));
    }

    #[test]
    fn blur_from_focused_is_silent() {
        let (state, effects) = InteractionState::Focused.blur();
        assert_eq!(state, InteractionState::Idle);
        assert!(effects.is_empty());
    }

    // --- Idempotence / no-op inputs ---

    #[test]
    fn focus_is_idempotent() {
        let (state, effects) = InteractionState::Focused.focus();
        assert_eq!(state, InteractionState::Focused);
        assert!(effects.is_empty());

        let (state, effects) = InteractionState::Activated.focus();
        assert_eq!(state, InteractionState::Activated);
        assert!(effects.is_empty());
    }

    #[test]
    fn activate_on_activated_is_a_noop() {
        let (state, effects) = InteractionState::Activated.activate();
        assert_eq!(state, InteractionState::Activated);
        assert!(effects.is_empty());
    }

    #[test]
    fn activate_on_idle_is_a_noop() {
        let (state, effects) = InteractionState::Idle.activate();
        assert_eq!(state, InteractionState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn deactivate_on_idle_and_focused_is_a_noop() {
        for start in [InteractionState::Idle, InteractionState::Focused] {
            let (state, effects) = start.deactivate();
            assert_eq!(state, start);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn blur_on_idle_is_a_noop() {
        let (state, effects) = InteractionState::Idle.blur();
        assert_eq!(state, InteractionState::Idle);
        assert!(effects.is_empty());
    }

    // --- Predicates ---

    #[test]
    fn focus_predicate_includes_activated() {
        assert!(!InteractionState::Idle.is_focused());
        assert!(InteractionState::Focused.is_focused());
        assert!(InteractionState::Activated.is_focused());
    }

    #[test]
    fn activation_predicate() {
        assert!(!InteractionState::Idle.is_activated());
        assert!(!InteractionState::Focused.is_activated());
        assert!(InteractionState::Activated.is_activated());
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(InteractionState::default(), InteractionState::Idle);
    }
}

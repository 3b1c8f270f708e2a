//! Player domain: the jump state machine.
//!
//! The machine advances at most one step per frame. The only edge driven by
//! input is `Grounded -> PrepareToJump`, which is taken while sampling input;
//! every other edge is taken by [`JumpState::step`].

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum JumpState {
    #[default]
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

/// Side effect attached to a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEffect {
    /// Play the jump sound.
    JumpSound,
    /// Arm the one-frame takeoff impulse.
    ArmJump,
    /// Body left the ground after takeoff.
    Jumped,
    /// Body touched down; landing sound plus landed message.
    Landed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTransition {
    pub from: JumpState,
    pub to: JumpState,
    pub effect: Option<JumpEffect>,
}

impl JumpState {
    /// Edge taken when the jump button goes down this frame.
    pub fn press_jump(self) -> Option<JumpTransition> {
        match self {
            JumpState::Grounded => Some(JumpTransition {
                from: self,
                to: JumpState::PrepareToJump,
                effect: Some(JumpEffect::JumpSound),
            }),
            _ => None,
        }
    }

    /// Per-frame transition table.
    pub fn step(self, grounded: bool) -> Option<JumpTransition> {
        let (to, effect) = match self {
            JumpState::Grounded => return None,
            JumpState::PrepareToJump => (JumpState::Jumping, Some(JumpEffect::ArmJump)),
            JumpState::Jumping if !grounded => (JumpState::InFlight, Some(JumpEffect::Jumped)),
            JumpState::Jumping => return None,
            JumpState::InFlight if grounded => (JumpState::Landed, Some(JumpEffect::Landed)),
            JumpState::InFlight => return None,
            JumpState::Landed => (JumpState::Grounded, None),
        };

        Some(JumpTransition {
            from: self,
            to,
            effect,
        })
    }
}

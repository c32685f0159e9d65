use crate::entity::SwapIntent;

#[derive(Clone, Default, Debug, PartialEq)]
pub enum SwapState {
    #[default]
    Idle,
    PendingConfirmation {
        intent: SwapIntent,
    },
    Settling {
        intent: SwapIntent,
    },
}

impl SwapState {
    pub fn name(&self) -> &'static str {
        match self {
            SwapState::Idle => "idle",
            SwapState::PendingConfirmation { .. } => "awaiting confirmation",
            SwapState::Settling { .. } => "settling",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SwapState::Idle)
    }
}

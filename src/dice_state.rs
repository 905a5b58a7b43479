/// Phase of the dice session. The controller moves through these forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DicePhase {
    Welcome,
    WaitOrSleep,
    Spinning,
    Throwing,
    Fading,
    Sleeping,
}

impl DicePhase {
    pub fn is_active(self) -> bool {
        match self {
            DicePhase::Spinning | DicePhase::Throwing | DicePhase::Fading => true,
            _ => false,
        }
    }
}

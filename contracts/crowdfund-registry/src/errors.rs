use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    CampaignNotFound = 3,
    StartInPast = 4,
    EndBeforeStart = 5,
    DurationTooLong = 6,
    InvalidAmount = 7,
    NotCreator = 8,
    AlreadyStarted = 9,
    NotStarted = 10,
    Ended = 11,
    NotEnded = 12,
    GoalNotReached = 13,
    GoalReached = 14,
    AlreadyClaimed = 15,
    InsufficientPledge = 16,
}

use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignLaunchedEvent {
    pub campaign_id: u64,
    pub creator: Address,
    pub goal: i128,
    pub start_at: u64,
    pub end_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCancelledEvent {
    pub campaign_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgedEvent {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpledgedEvent {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub campaign_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEvent {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
}

pub fn emit_launched(env: &Env, event: CampaignLaunchedEvent) {
    env.events()
        .publish((Symbol::new(env, "launched"), event.campaign_id), event);
}

pub fn emit_cancelled(env: &Env, event: CampaignCancelledEvent) {
    env.events()
        .publish((Symbol::new(env, "cancelled"), event.campaign_id), event);
}

pub fn emit_pledged(env: &Env, event: PledgedEvent) {
    env.events()
        .publish((Symbol::new(env, "pledged"), event.campaign_id), event);
}

pub fn emit_unpledged(env: &Env, event: UnpledgedEvent) {
    env.events()
        .publish((Symbol::new(env, "unpledged"), event.campaign_id), event);
}

pub fn emit_claimed(env: &Env, event: ClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "claimed"), event.campaign_id), event);
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    env.events()
        .publish((Symbol::new(env, "refunded"), event.campaign_id), event);
}

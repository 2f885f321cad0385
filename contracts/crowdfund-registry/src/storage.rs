use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,                // -> Address
    NextCampaignId,       // -> u64
    Campaign(u64),        // -> Campaign
    Pledge(u64, Address), // (campaign_id, donor) -> i128
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub pledged: i128,
    pub start_at: u64,
    pub end_at: u64,
    pub claimed: bool,
}

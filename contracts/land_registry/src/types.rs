use soroban_sdk::{contracterror, contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParcelStatus {
    None,
    Pending,
    Verified,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parcel {
    pub owner: Address,
    pub size: u64,
    pub status: ParcelStatus,
}

/// Event topics. Payloads are documented on the entry points that publish them.
#[contracttype]
#[derive(Clone, Copy, PartialEq)]
pub enum Event {
    AgentAdded,         // data: agent
    AgentRevoked,       // data: agent
    LandRegistered,     // (certificate) -> owner
    LandVerified,       // (certificate) -> agent
    LandTransferred,    // (certificate) -> (from, to)
    FeePaid,            // (payer) -> amount
    ExternalViewResult, // data: (success, owner)
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotDeveloper = 3,
    NotAgent = 4,
    AlreadyAgent = 5,
    NotOwner = 6,
    NotVerified = 7,
    AlreadyExists = 8,
    InvalidCertificate = 9,
    IncorrectFee = 10,
}

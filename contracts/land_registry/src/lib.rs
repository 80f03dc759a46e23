#![no_std]
use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, Env, Symbol, Vec,
};

mod access;
mod storage;
mod types;

pub use types::{Error, Event, Parcel, ParcelStatus};

/// One-time fee required to register a parcel, in fee-token stroops.
/// Forwarded in full to the administrator.
pub const REGISTRATION_FEE: i128 = 10_000_000;

#[contract]
pub struct LandRegistry;

#[contractimpl]
impl LandRegistry {
    /// One-time initializer.
    /// Fixes the administrator identity and the settlement token; neither
    /// has a mutation path afterwards.
    pub fn init(e: Env, admin: Address, fee_token: Address) -> Result<(), Error> {
        if storage::has_admin(&e) {
            return Err(Error::AlreadyInitialized);
        }
        storage::put_admin(&e, &admin);
        storage::put_fee_token(&e, &fee_token);
        Ok(())
    }

    /// Authorize a verification agent.
    /// Only the administrator may call.
    pub fn add_agent(e: Env, caller: Address, agent: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_admin(&e, &caller)?;
        storage::add_agent(&e, &agent)?;

        e.events().publish((Event::AgentAdded,), agent);
        Ok(())
    }

    /// Withdraw an agent's authorization.
    /// Only the administrator may call.
    pub fn revoke_agent(e: Env, caller: Address, agent: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_admin(&e, &caller)?;
        storage::revoke_agent(&e, &agent)?;

        e.events().publish((Event::AgentRevoked,), agent);
        Ok(())
    }

    /// Create a Pending parcel owned by the caller against exact payment of
    /// the registration fee. The fee settles caller -> administrator on the
    /// configured token; a failed transfer traps and rolls the whole
    /// registration back.
    pub fn register_land(
        e: Env,
        caller: Address,
        certificate: u64,
        size: u64,
        tendered: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let admin = storage::admin(&e)?;
        if certificate == 0 {
            return Err(Error::InvalidCertificate);
        }
        if tendered != REGISTRATION_FEE {
            return Err(Error::IncorrectFee);
        }
        storage::create_parcel(&e, certificate, size, caller.clone())?;

        let fee_token = token::Client::new(&e, &storage::fee_token(&e)?);
        fee_token.transfer(&caller, &admin, &tendered);

        e.events().publish((Event::FeePaid, caller.clone()), tendered);
        e.events().publish((Event::LandRegistered, certificate), caller);
        Ok(())
    }

    /// Attest a parcel's recorded ownership, advancing it to Verified.
    /// Only a currently-authorized agent may call. Re-verifying an already
    /// Verified parcel succeeds without effect.
    pub fn verify_ownership(e: Env, caller: Address, certificate: u64) -> Result<(), Error> {
        caller.require_auth();
        access::require_agent(&e, &caller)?;
        storage::verify_parcel(&e, certificate)?;

        e.events().publish((Event::LandVerified, certificate), caller);
        Ok(())
    }

    /// Hand a Verified parcel to a new owner. Only the current owner may
    /// call; a Pending parcel can never change hands.
    pub fn transfer_land(
        e: Env,
        caller: Address,
        certificate: u64,
        new_owner: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        let parcel = access::require_owner(&e, &caller, certificate)?;
        if parcel.status != ParcelStatus::Verified {
            return Err(Error::NotVerified);
        }
        storage::transfer_parcel(&e, certificate, new_owner.clone())?;

        e.events().publish((Event::LandTransferred, certificate), (caller, new_owner));
        Ok(())
    }

    /// Read a parcel record: (owner, size, status).
    pub fn view_land(e: Env, certificate: u64) -> Result<(Address, u64, Symbol), Error> {
        let parcel = storage::get_parcels(&e)
            .get(certificate)
            .ok_or(Error::InvalidCertificate)?;
        let status = match parcel.status {
            ParcelStatus::None => symbol_short!("None"),
            ParcelStatus::Pending => symbol_short!("Pending"),
            ParcelStatus::Verified => symbol_short!("Verified"),
        };
        Ok((parcel.owner, parcel.size, status))
    }

    /// Every certificate ever registered, in insertion order, all statuses.
    pub fn view_all_certificates(e: Env) -> Vec<u64> {
        storage::get_certs(&e)
    }

    pub fn get_agents(e: Env) -> Vec<Address> {
        storage::get_roster(&e)
    }

    pub fn is_agent(e: Env, address: Address) -> bool {
        storage::is_agent(&e, &address)
    }

    pub fn registration_fee() -> i128 {
        REGISTRATION_FEE
    }

    /// Read-only probe of a peer registry at `target`. Remote failure of
    /// any kind is collapsed into (false, None) here instead of
    /// propagating to the caller.
    pub fn query_remote(e: Env, target: Address, certificate: u64) -> (bool, Option<Address>) {
        let peer = LandRegistryClient::new(&e, &target);
        let (success, owner) = match peer.try_view_land(&certificate) {
            Ok(Ok((owner, _, _))) => (true, Some(owner)),
            _ => (false, None),
        };

        e.events().publish((Event::ExternalViewResult,), (success, owner.clone()));
        (success, owner)
    }
}

use soroban_sdk::{symbol_short, Address, Env, Map, Symbol, Vec};

use crate::types::{Error, Parcel, ParcelStatus};

fn k_admin() -> Symbol { symbol_short!("admin") }
fn k_token() -> Symbol { symbol_short!("feetok") }
fn k_parcels() -> Symbol { symbol_short!("parcels") } // Map<u64, Parcel>
fn k_certs() -> Symbol { symbol_short!("certs") }     // Vec<u64>, append-only
fn k_flags() -> Symbol { symbol_short!("agflags") }   // Map<Address, bool>
fn k_roster() -> Symbol { symbol_short!("roster") }   // Vec<Address>

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&k_admin())
}

pub fn put_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&k_admin(), admin);
}

pub fn admin(e: &Env) -> Result<Address, Error> {
    e.storage().instance().get(&k_admin()).ok_or(Error::NotInitialized)
}

pub fn put_fee_token(e: &Env, token: &Address) {
    e.storage().instance().set(&k_token(), token);
}

pub fn fee_token(e: &Env) -> Result<Address, Error> {
    e.storage().instance().get(&k_token()).ok_or(Error::NotInitialized)
}

// ── Parcel store ─────────────────────────────────────────────────────

pub fn get_parcels(e: &Env) -> Map<u64, Parcel> {
    e.storage().instance().get(&k_parcels()).unwrap_or(Map::new(e))
}

fn put_parcels(e: &Env, m: &Map<u64, Parcel>) {
    e.storage().instance().set(&k_parcels(), m);
}

pub fn get_certs(e: &Env) -> Vec<u64> {
    e.storage().instance().get(&k_certs()).unwrap_or(Vec::new(e))
}

fn put_certs(e: &Env, v: &Vec<u64>) {
    e.storage().instance().set(&k_certs(), v);
}

/// Insert a new Pending parcel and append its certificate to the
/// enumeration list. Certificates are never reused.
pub fn create_parcel(e: &Env, certificate: u64, size: u64, owner: Address) -> Result<(), Error> {
    let mut parcels = get_parcels(e);
    if parcels.contains_key(certificate) {
        return Err(Error::AlreadyExists);
    }
    parcels.set(certificate, Parcel { owner, size, status: ParcelStatus::Pending });
    put_parcels(e, &parcels);

    let mut certs = get_certs(e);
    certs.push_back(certificate);
    put_certs(e, &certs);
    Ok(())
}

/// Advance a parcel to Verified. Re-verifying a Verified parcel is a no-op
/// that still succeeds; status never regresses.
pub fn verify_parcel(e: &Env, certificate: u64) -> Result<(), Error> {
    let mut parcels = get_parcels(e);
    let mut parcel = parcels.get(certificate).ok_or(Error::InvalidCertificate)?;
    parcel.status = ParcelStatus::Verified;
    parcels.set(certificate, parcel);
    put_parcels(e, &parcels);
    Ok(())
}

/// Overwrite the owner. The caller has already confirmed the parcel exists
/// and is Verified; size and status are untouched.
pub fn transfer_parcel(e: &Env, certificate: u64, new_owner: Address) -> Result<(), Error> {
    let mut parcels = get_parcels(e);
    let mut parcel = parcels.get(certificate).ok_or(Error::InvalidCertificate)?;
    parcel.owner = new_owner;
    parcels.set(certificate, parcel);
    put_parcels(e, &parcels);
    Ok(())
}

// ── Agent roster ─────────────────────────────────────────────────────

fn get_flags(e: &Env) -> Map<Address, bool> {
    e.storage().instance().get(&k_flags()).unwrap_or(Map::new(e))
}

fn put_flags(e: &Env, m: &Map<Address, bool>) {
    e.storage().instance().set(&k_flags(), m);
}

pub fn get_roster(e: &Env) -> Vec<Address> {
    e.storage().instance().get(&k_roster()).unwrap_or(Vec::new(e))
}

fn put_roster(e: &Env, v: &Vec<Address>) {
    e.storage().instance().set(&k_roster(), v);
}

pub fn is_agent(e: &Env, who: &Address) -> bool {
    get_flags(e).get(who.clone()).unwrap_or(false)
}

pub fn add_agent(e: &Env, agent: &Address) -> Result<(), Error> {
    if is_agent(e, agent) {
        return Err(Error::AlreadyAgent);
    }
    let mut flags = get_flags(e);
    flags.set(agent.clone(), true);
    put_flags(e, &flags);

    let mut roster = get_roster(e);
    roster.push_back(agent.clone());
    put_roster(e, &roster);
    Ok(())
}

/// Clear the authorization flag and swap-remove the agent from the roster
/// list. Enumeration order is not stable across revocations.
pub fn revoke_agent(e: &Env, agent: &Address) -> Result<(), Error> {
    if !is_agent(e, agent) {
        return Err(Error::NotAgent);
    }
    let mut flags = get_flags(e);
    flags.set(agent.clone(), false);
    put_flags(e, &flags);

    let mut roster = get_roster(e);
    if let Some(idx) = roster.first_index_of(agent.clone()) {
        if let Some(last) = roster.pop_back() {
            if idx < roster.len() {
                roster.set(idx, last);
            }
        }
    }
    put_roster(e, &roster);
    Ok(())
}

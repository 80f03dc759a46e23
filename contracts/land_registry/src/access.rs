use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::{Error, Parcel};

pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    if *caller != storage::admin(e)? {
        return Err(Error::NotDeveloper);
    }
    Ok(())
}

pub fn require_agent(e: &Env, caller: &Address) -> Result<(), Error> {
    if !storage::is_agent(e, caller) {
        return Err(Error::NotAgent);
    }
    Ok(())
}

/// A certificate with no record has no owner, so every caller is rejected
/// for nonexistent parcels too.
pub fn require_owner(e: &Env, caller: &Address, certificate: u64) -> Result<Parcel, Error> {
    let parcel = storage::get_parcels(e).get(certificate).ok_or(Error::NotOwner)?;
    if parcel.owner != *caller {
        return Err(Error::NotOwner);
    }
    Ok(parcel)
}

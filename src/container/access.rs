//! Typed getters.
//!
//! Two families: the plain getters (`get`, `get_shaped`, `get_valid`) fail
//! with `MissingKey` on absence and leave no trace in the ledger; the
//! default-providing getters (`get_or*`, `get_requested`, `get_list`) never
//! fail on absence, record a [`Request`] on every call and may write the
//! default back. Both families fail on undecodable values and on values the
//! validator rejects, defaults included.

use crate::codec::{tokenize, Decode, Encode, Shape};
use crate::container::ConfigContainer;
use crate::error::{ConfigError, Result};
use crate::request::{CallSite, Request};
use crate::validation::{ValidateAny, Validator};
use tracing::warn;

impl ConfigContainer {
    /// Decode the value stored under `key`.
    pub fn get<T: Decode>(&self, key: &str) -> Result<T> {
        self.get_valid(key, &ValidateAny)
    }

    /// Decode the value stored under `key` with a requested vector size or
    /// matrix shape.
    pub fn get_shaped<T: Decode>(&self, key: &str, shape: Shape) -> Result<T> {
        self.get_checked(key, &ValidateAny, shape)
    }

    /// Decode and validate the value stored under `key`.
    pub fn get_valid<T, V>(&self, key: &str, validator: &V) -> Result<T>
    where
        T: Decode,
        V: Validator<T> + ?Sized,
    {
        self.get_checked(key, validator, Shape::any())
    }

    fn get_checked<T, V>(&self, key: &str, validator: &V, shape: Shape) -> Result<T>
    where
        T: Decode,
        V: Validator<T> + ?Sized,
    {
        let raw = self
            .get_raw(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        let value = T::decode(raw, shape)?;
        validate(key, value, validator)
    }

    /// The value under `key`, or `default` if there is none.
    pub fn get_or<T: Decode + Encode>(&mut self, key: &str, default: T) -> Result<T> {
        self.get_requested(key, default, &ValidateAny, Shape::any(), None)
    }

    pub fn get_or_shaped<T: Decode + Encode>(
        &mut self,
        key: &str,
        default: T,
        shape: Shape,
    ) -> Result<T> {
        self.get_requested(key, default, &ValidateAny, shape, None)
    }

    pub fn get_or_valid<T, V>(&mut self, key: &str, default: T, validator: &V) -> Result<T>
    where
        T: Decode + Encode,
        V: Validator<T> + ?Sized,
    {
        self.get_requested(key, default, validator, Shape::any(), None)
    }

    /// The general default-providing lookup.
    ///
    /// Records the request (stamped with `site` if given), falls back to
    /// `default` when `key` is absent, decodes a stored value with `shape`
    /// and runs `validator` on whichever value is about to be returned.
    pub fn get_requested<T, V>(
        &mut self,
        key: &str,
        default: T,
        validator: &V,
        shape: Shape,
        site: Option<CallSite>,
    ) -> Result<T>
    where
        T: Decode + Encode,
        V: Validator<T> + ?Sized,
    {
        let encoded = default.encode();
        let request = match site {
            Some(site) => Request::from_site(key, encoded.clone(), site),
            None => Request::new(key, encoded.clone(), validator.name()),
        };
        let value = match self.lookup(key, encoded, request) {
            Some(raw) => T::decode(&raw, shape)?,
            None => default,
        };
        validate(key, value, validator)
    }

    /// Split the value under `key` (or the encoded `default`) at any of
    /// `separators` and decode and validate every token on its own.
    pub fn get_list<T, V>(
        &mut self,
        key: &str,
        default: T,
        separators: &str,
        validator: &V,
    ) -> Result<Vec<T>>
    where
        T: Decode + Encode,
        V: Validator<T> + ?Sized,
    {
        let encoded = default.encode();
        let request = Request::new(key, encoded.clone(), validator.name());
        let raw = self
            .lookup(key, encoded.clone(), request)
            .unwrap_or(encoded);
        tokenize(&raw, separators)
            .iter()
            .map(|token| validate(key, T::decode(token, Shape::any())?, validator))
            .collect()
    }

    /// Record `request` and return the stored string, or `None` if the
    /// default applies. Handles the warning and the write-back.
    ///
    /// The write-back is best-effort: a key that cannot hold a value (it
    /// names a sub-tree, say) is logged and left unset.
    fn lookup(&mut self, key: &str, encoded_default: String, request: Request) -> Option<String> {
        self.ledger_mut().record(request);
        if let Some(raw) = self.get_raw(key) {
            return Some(raw.to_string());
        }
        if self.options().warn_on_default_access {
            warn!(key, default = %encoded_default, "Using default value for missing key");
        }
        if self.options().record_defaults {
            if let Err(e) = self.tree_mut().set_raw(key, encoded_default, false) {
                warn!(key, error = %e, "Could not record default value");
            }
        }
        None
    }
}

fn validate<T, V>(key: &str, value: T, validator: &V) -> Result<T>
where
    V: Validator<T> + ?Sized,
{
    if validator.accepts(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            diagnostic: validator.describe(),
        })
    }
}

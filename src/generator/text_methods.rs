//! Decimal string methods for FlakeId generator
//!
//! Ids cross the public boundary as decimal strings so consumers without
//! native 64-bit integers keep full precision.

use super::FlakeId;
use crate::error::FlakeIdError;
use crate::time::TimeSource;

impl<T: TimeSource> FlakeId<T> {
    /// Generate a new FlakeId formatted as a decimal string
    pub fn next_id(&self) -> Result<String, FlakeIdError> {
        self.generate().map(|id| id.to_string())
    }

    /// Generate a new FlakeId as a decimal string together with its raw value
    pub fn next_id_with_raw(&self) -> Result<(String, u64), FlakeIdError> {
        let id = self.generate()?;
        Ok((id.to_string(), id))
    }

    /// Return `existing` when it holds a non-empty key, otherwise a fresh id.
    ///
    /// This is how records without a primary key get one before being
    /// written to the store.
    pub fn ensure_id(&self, existing: Option<&str>) -> Result<String, FlakeIdError> {
        match existing {
            Some(key) if !key.is_empty() => Ok(key.to_owned()),
            _ => self.next_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FlakeId;

    #[test]
    fn test_next_id_is_decimal() {
        let generator = FlakeId::new(1, 2).unwrap();
        let id = generator.next_id().unwrap();

        assert!(!id.is_empty());
        assert!(id.bytes().all(|b| b.is_ascii_digit()));

        let parts = generator.extract.decompose_str(&id).unwrap();
        assert_eq!(parts.worker_id, 1);
        assert_eq!(parts.datacenter_id, 2);
    }

    #[test]
    fn test_next_id_with_raw() {
        let generator = FlakeId::new(1, 2).unwrap();
        let (id, raw) = generator.next_id_with_raw().unwrap();
        assert_eq!(id.parse::<u64>().unwrap(), raw);
    }

    #[test]
    fn test_ensure_id_keeps_existing_key() {
        let generator = FlakeId::new(0, 0).unwrap();
        assert_eq!(generator.ensure_id(Some("user-42")).unwrap(), "user-42");
    }

    #[test]
    fn test_ensure_id_fills_missing_key() {
        let generator = FlakeId::new(3, 4).unwrap();

        let from_none = generator.ensure_id(None).unwrap();
        let from_empty = generator.ensure_id(Some("")).unwrap();

        assert_ne!(from_none, from_empty);
        assert!(from_none.parse::<u64>().is_ok());
        assert!(from_empty.parse::<u64>().is_ok());
    }
}

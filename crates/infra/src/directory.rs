//! In-memory credential directory.
//!
//! Backs development and tests. The map is behind an `RwLock` so identities
//! can be administered while the server runs; a poisoned lock is reported as
//! a directory outage rather than folded into "not found".

use std::collections::HashMap;
use std::sync::RwLock;

use authgate_auth::{CredentialDirectory, CredentialRecord, DirectoryError};
use authgate_core::{Identity, Role, Subject};

use crate::password::{PasswordHashError, hash_password, verify_password};

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: RwLock<HashMap<Subject, CredentialRecord>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an identity, hashing the given plaintext password.
    pub fn upsert(&self, identity: Identity, password: &str) -> Result<(), PasswordHashError> {
        let secret_hash = hash_password(password)?;
        let subject = identity.subject.clone();
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        tracing::debug!(%subject, "stored credential record");
        records.insert(
            subject,
            CredentialRecord {
                identity,
                secret_hash,
            },
        );
        Ok(())
    }

    /// Add a role to an existing subject. Returns false if unknown.
    pub fn assign_role(&self, subject: &Subject, role: Role) -> bool {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        match records.get_mut(subject) {
            Some(record) => {
                if !record.identity.roles.contains(&role) {
                    record.identity.roles.push(role);
                }
                true
            }
            None => false,
        }
    }

    /// Enable or disable an existing subject. Returns false if unknown.
    pub fn set_enabled(&self, subject: &Subject, enabled: bool) -> bool {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        match records.get_mut(subject) {
            Some(record) => {
                record.identity.enabled = enabled;
                true
            }
            None => false,
        }
    }
}

impl CredentialDirectory for InMemoryDirectory {
    fn find_by_subject(
        &self,
        subject: &Subject,
    ) -> Result<Option<CredentialRecord>, DirectoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))?;
        Ok(records.get(subject).cloned())
    }

    fn verify_secret(&self, plain: &str, stored_hash: &str) -> bool {
        verify_password(plain, stored_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::new(Subject::new("alice"), vec![Role::USER])
    }

    #[test]
    fn upsert_then_find() {
        let directory = InMemoryDirectory::new();
        directory.upsert(alice(), "pw").unwrap();

        let record = directory
            .find_by_subject(&Subject::new("alice"))
            .unwrap()
            .unwrap();
        assert_eq!(record.identity.subject, Subject::new("alice"));
        assert!(directory.verify_secret("pw", &record.secret_hash));
        assert!(!directory.verify_secret("nope", &record.secret_hash));
    }

    #[test]
    fn unknown_subject_is_none_not_an_error() {
        let directory = InMemoryDirectory::new();
        assert_eq!(directory.find_by_subject(&Subject::new("ghost")).unwrap(), None);
    }

    #[test]
    fn assign_role_extends_an_identity() {
        let directory = InMemoryDirectory::new();
        directory.upsert(alice(), "pw").unwrap();

        assert!(directory.assign_role(&Subject::new("alice"), Role::MODERATOR));
        let record = directory
            .find_by_subject(&Subject::new("alice"))
            .unwrap()
            .unwrap();
        assert_eq!(record.identity.roles, vec![Role::USER, Role::MODERATOR]);

        assert!(!directory.assign_role(&Subject::new("ghost"), Role::ADMIN));
    }

    #[test]
    fn set_enabled_toggles_the_account() {
        let directory = InMemoryDirectory::new();
        directory.upsert(alice(), "pw").unwrap();

        assert!(directory.set_enabled(&Subject::new("alice"), false));
        let record = directory
            .find_by_subject(&Subject::new("alice"))
            .unwrap()
            .unwrap();
        assert!(!record.identity.enabled);
    }
}

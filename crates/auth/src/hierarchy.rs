//! Role hierarchy: a higher role inherits every lower role.
//!
//! The hierarchy is precomputed at startup into a role → implied-roles map
//! so request-time expansion is a couple of hash lookups, never string
//! manipulation.

use std::collections::{HashMap, HashSet};

use authgate_core::Role;

#[derive(Debug, Clone)]
pub struct RoleHierarchy {
    implied: HashMap<Role, HashSet<Role>>,
}

impl RoleHierarchy {
    /// Build a hierarchy from an ordered chain, lowest role first.
    ///
    /// Each role implies itself plus everything before it in the chain.
    pub fn from_chain(chain: &[Role]) -> Self {
        let mut implied = HashMap::with_capacity(chain.len());
        for (idx, role) in chain.iter().enumerate() {
            let set: HashSet<Role> = chain[..=idx].iter().cloned().collect();
            implied.insert(role.clone(), set);
        }
        Self { implied }
    }

    /// A hierarchy with no inheritance edges: every role stands alone.
    pub fn flat() -> Self {
        Self {
            implied: HashMap::new(),
        }
    }

    /// Expand a set of granted roles into its downward closure.
    ///
    /// Roles outside the hierarchy imply only themselves.
    pub fn expand(&self, roles: &[Role]) -> HashSet<Role> {
        let mut expanded = HashSet::new();
        for role in roles {
            match self.implied.get(role) {
                Some(set) => expanded.extend(set.iter().cloned()),
                None => {
                    expanded.insert(role.clone());
                }
            }
        }
        expanded
    }
}

impl Default for RoleHierarchy {
    /// USER < MODERATOR < ADMIN.
    fn default() -> Self {
        Self::from_chain(&[Role::USER, Role::MODERATOR, Role::ADMIN])
    }
}

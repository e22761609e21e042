//! The ordered list of role strings shown by the typewriter.

use crate::error::InvalidConfiguration;

/// A single role string with its length in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    text: String,
    char_len: usize,
}

impl Role {
    fn new(text: String) -> Self {
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    /// The full role text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// The first `count` characters of the role.
    ///
    /// `count` is clamped to the role length.
    pub fn prefix(&self, count: usize) -> &str {
        match self.text.char_indices().nth(count) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }
}

/// Non-empty, immutable, ordered sequence of roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleList {
    roles: Vec<Role>,
}

impl RoleList {
    /// Build a role list, rejecting an empty list or any empty role.
    pub fn new<I, S>(roles: I) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<Role> = roles.into_iter().map(|r| Role::new(r.into())).collect();

        if roles.is_empty() {
            return Err(InvalidConfiguration::EmptyRoleList);
        }
        if let Some(index) = roles.iter().position(|r| r.char_len == 0) {
            return Err(InvalidConfiguration::EmptyRole { index });
        }

        Ok(Self { roles })
    }

    /// Number of roles (always at least one).
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Role at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Role> {
        self.roles.get(index)
    }

    /// Index of the role after `index`, wrapping to the start.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.roles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }
}

impl std::ops::Index<usize> for RoleList {
    type Output = Role;

    fn index(&self, index: usize) -> &Role {
        &self.roles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        let roles: Vec<String> = Vec::new();
        assert_eq!(RoleList::new(roles), Err(InvalidConfiguration::EmptyRoleList));
    }

    #[test]
    fn rejects_empty_role_with_index() {
        assert_eq!(
            RoleList::new(["Engineer", "", "Writer"]),
            Err(InvalidConfiguration::EmptyRole { index: 1 })
        );
    }

    #[test]
    fn next_index_wraps() {
        let roles = RoleList::new(["a", "b", "c"]).unwrap();
        assert_eq!(roles.next_index(0), 1);
        assert_eq!(roles.next_index(2), 0);
    }

    #[test]
    fn single_role_wraps_to_itself() {
        let roles = RoleList::new(["x"]).unwrap();
        assert_eq!(roles.next_index(0), 0);
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        let roles = RoleList::new(["héllo wörld"]).unwrap();
        let role = &roles[0];
        assert_eq!(role.char_len(), 11);
        assert_eq!(role.prefix(2), "hé");
        assert_eq!(role.prefix(9), "héllo wör");
    }

    #[test]
    fn prefix_clamps_to_full_text() {
        let roles = RoleList::new(["abc"]).unwrap();
        assert_eq!(roles[0].prefix(0), "");
        assert_eq!(roles[0].prefix(3), "abc");
        assert_eq!(roles[0].prefix(10), "abc");
    }
}

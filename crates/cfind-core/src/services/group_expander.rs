//! Expansion of `compilers` specs into concrete compiler ids.
//!
//! A spec is a `:`-separated list of tokens. A token is either a compiler id
//! or `&name`, a reference to the group whose members are listed under
//! `group.<name>.compilers`. Groups nest arbitrarily.
//!
//! Every group is expanded at most once per spec, so expansion is linear in
//! the number of distinct tokens. A reference to a group that is undefined, or
//! that is still being expanded further up the current path, contributes no
//! members.

use std::collections::HashSet;

/// Marks a token as a group reference.
pub const GROUP_PREFIX: char = '&';

/// Separates tokens in `compilers` specs.
pub const SPEC_SEPARATOR: char = ':';

/// A concrete compiler id together with the groups it was reached through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedCompiler {
    pub id: String,
    /// Group path, outermost first. Empty for ids listed directly.
    pub groups: Vec<String>,
}

/// A group reference that contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupProblem {
    Undefined(String),
    Cyclic(String),
}

/// Result of expanding one spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// De-duplicated compilers in first-seen order.
    pub compilers: Vec<ExpandedCompiler>,
    pub problems: Vec<GroupProblem>,
}

impl Expansion {
    pub fn ids(&self) -> Vec<&str> {
        self.compilers.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Split a spec into its non-empty, trimmed tokens.
pub fn split_spec(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(SPEC_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

struct Frame {
    group: Option<String>,
    tokens: Vec<String>,
    next: usize,
}

impl Frame {
    fn new(group: Option<String>, spec: &str) -> Self {
        Self {
            group,
            tokens: split_spec(spec).map(str::to_string).collect(),
            next: 0,
        }
    }

    fn next_token(&mut self) -> Option<String> {
        let token = self.tokens.get(self.next).cloned();
        self.next += 1;
        token
    }
}

/// Expand `spec`, resolving group references through `group_members`.
///
/// `group_members` returns the raw member spec of a group, or `None` when the
/// group is not defined. The walk uses an explicit stack, so deeply nested
/// groups cannot exhaust the call stack.
pub fn expand_compilers<F>(spec: &str, group_members: F) -> Expansion
where
    F: Fn(&str) -> Option<String>,
{
    let mut expansion = Expansion::default();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut visited_groups: HashSet<String> = HashSet::new();
    let mut path: Vec<String> = Vec::new();
    let mut stack = vec![Frame::new(None, spec)];

    while let Some(frame) = stack.last_mut() {
        let Some(token) = frame.next_token() else {
            if stack.pop().and_then(|done| done.group).is_some() {
                path.pop();
            }
            continue;
        };

        if let Some(name) = token.strip_prefix(GROUP_PREFIX) {
            if path.iter().any(|open| open == name) {
                expansion
                    .problems
                    .push(GroupProblem::Cyclic(name.to_string()));
                continue;
            }
            if !visited_groups.insert(name.to_string()) {
                // Already expanded via another path; its members are emitted.
                continue;
            }
            match group_members(name) {
                Some(members) => {
                    tracing::debug!(group = name, "Processing compilers from group");
                    path.push(name.to_string());
                    stack.push(Frame::new(Some(name.to_string()), &members));
                }
                None => expansion
                    .problems
                    .push(GroupProblem::Undefined(name.to_string())),
            }
        } else if seen_ids.insert(token.clone()) {
            expansion.compilers.push(ExpandedCompiler {
                id: token,
                groups: path.clone(),
            });
        }
    }

    expansion
}

//! Prompt selection — maps a free-form (role, difficulty) pair to the
//! interviewer's system instruction.
//!
//! Matching is case-insensitive. Anything outside the catalog degrades to
//! `FALLBACK_SYSTEM`; selection never fails.

use std::str::FromStr;

use crate::interview::prompts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Frontend,
    Backend,
    Devops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Frontend, Role::Backend, Role::Devops];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Frontend => "frontend",
            Role::Backend => "backend",
            Role::Devops => "devops",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Frontend => "Frontend Developer",
            Role::Backend => "Backend Developer",
            Role::Devops => "DevOps Engineer",
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Beginner",
            Difficulty::Medium => "Intermediate",
            Difficulty::Hard => "Advanced",
        }
    }
}

/// Returned when a string is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized;

impl FromStr for Role {
    type Err = Unrecognized;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or(Unrecognized)
    }
}

impl FromStr for Difficulty {
    type Err = Unrecognized;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or(Unrecognized)
    }
}

fn instruction(role: Role, difficulty: Difficulty) -> &'static str {
    match (role, difficulty) {
        (Role::Frontend, Difficulty::Easy) => FRONTEND_EASY,
        (Role::Frontend, Difficulty::Medium) => FRONTEND_MEDIUM,
        (Role::Frontend, Difficulty::Hard) => FRONTEND_HARD,
        (Role::Backend, Difficulty::Easy) => BACKEND_EASY,
        (Role::Backend, Difficulty::Medium) => BACKEND_MEDIUM,
        (Role::Backend, Difficulty::Hard) => BACKEND_HARD,
        (Role::Devops, Difficulty::Easy) => DEVOPS_EASY,
        (Role::Devops, Difficulty::Medium) => DEVOPS_MEDIUM,
        (Role::Devops, Difficulty::Hard) => DEVOPS_HARD,
    }
}

/// Returns the system instruction for a free-form role and difficulty.
pub fn select_system_prompt(role: &str, difficulty: &str) -> &'static str {
    match (role.parse::<Role>(), difficulty.parse::<Difficulty>()) {
        (Ok(role), Ok(difficulty)) => instruction(role, difficulty),
        _ => FALLBACK_SYSTEM,
    }
}

/// Builds the opening assistant turn. Unknown values are shown as given.
pub fn greeting(role: &str, difficulty: &str) -> String {
    let role_label = role.parse::<Role>().map(Role::label).unwrap_or(role);
    let difficulty_label = difficulty
        .parse::<Difficulty>()
        .map(Difficulty::label)
        .unwrap_or(difficulty);
    GREETING_TEMPLATE
        .replace("{role_label}", role_label)
        .replace("{difficulty_label}", difficulty_label)
}

use chrono::{DateTime, Utc};

use super::value_objects::{Flag, TeamCode, TeamId};
use crate::domain::goal::GoalId;

/// Selects one of a team's two goal reference lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalList {
    /// Goals this team scored (the goal's `team_for` side)
    Scored,
    /// Goals scored against this team (the goal's `team_to` side)
    Against,
}

/// Team aggregate root
///
/// A team owns two ordered lists of goal references: the goals it scored
/// and the goals scored against it. The lists hold identifiers only; the
/// goal documents live in their own collection.
///
/// # Invariants
/// - Code and flag are validated value objects
/// - Reference lists preserve insertion order
/// - Every mutation refreshes `updated_at`
///
/// # Example
/// ```
/// use scoreline_api::domain::team::{Flag, Team, TeamCode};
///
/// let team = Team::new(
///     TeamCode::new("AR".to_string()).unwrap(),
///     Flag::new("🇦🇷".to_string()).unwrap(),
///     "Argentina".to_string(),
/// );
///
/// assert_eq!(team.name(), "Argentina");
/// assert!(team.goals_scored().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    code: TeamCode,
    flag: Flag,
    name: String,
    goals_scored: Vec<GoalId>,
    goals_against: Vec<GoalId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team with empty goal reference lists
    ///
    /// # Arguments
    /// * `code` - Validated two-character code
    /// * `flag` - Validated flag emoji
    /// * `name` - Display name
    pub fn new(code: TeamCode, flag: Flag, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: TeamId::new(),
            code,
            flag,
            name,
            goals_scored: Vec::new(),
            goals_against: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update to the descriptive fields
    ///
    /// The reference lists are untouched: they change only through the
    /// goal write protocols.
    pub(crate) fn apply(&mut self, patch: TeamPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(flag) = patch.flag {
            self.flag = flag;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.touch();
    }

    /// Appends a goal reference to the selected list
    ///
    /// Plain append: replaying the call stores a second copy.
    pub(crate) fn push_goal(&mut self, list: GoalList, goal: GoalId) {
        self.list_mut(list).push(goal);
        self.touch();
    }

    /// Appends a goal reference only when it is not already present
    ///
    /// Returns whether the list changed.
    pub(crate) fn push_goal_if_absent(&mut self, list: GoalList, goal: GoalId) -> bool {
        if self.list(list).contains(&goal) {
            return false;
        }
        self.list_mut(list).push(goal);
        self.touch();
        true
    }

    /// Removes every occurrence of a goal reference from the selected list
    ///
    /// Removing an absent reference is a no-op, so replays converge.
    /// Returns whether anything was removed.
    pub(crate) fn pull_goal(&mut self, list: GoalList, goal: GoalId) -> bool {
        let refs = self.list_mut(list);
        let before = refs.len();
        refs.retain(|g| *g != goal);
        let changed = refs.len() != before;
        if changed {
            self.touch();
        }
        changed
    }

    /// Returns the selected reference list in insertion order
    pub fn list(&self, list: GoalList) -> &[GoalId] {
        match list {
            GoalList::Scored => &self.goals_scored,
            GoalList::Against => &self.goals_against,
        }
    }

    fn list_mut(&mut self, list: GoalList) -> &mut Vec<GoalId> {
        match list {
            GoalList::Scored => &mut self.goals_scored,
            GoalList::Against => &mut self.goals_against,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team's code
    pub fn code(&self) -> &TeamCode {
        &self.code
    }

    /// Returns the team's flag
    pub fn flag(&self) -> &Flag {
        &self.flag
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the goals this team scored, oldest first
    pub fn goals_scored(&self) -> &[GoalId] {
        &self.goals_scored
    }

    /// Returns the goals scored against this team, oldest first
    pub fn goals_against(&self) -> &[GoalId] {
        &self.goals_against
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Partial update for a team's descriptive fields
///
/// The goal reference lists are deliberately absent here; only the goal
/// write protocols may touch them.
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    pub code: Option<TeamCode>,
    pub flag: Option<Flag>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argentina() -> Team {
        Team::new(
            TeamCode::new("AR".to_string()).unwrap(),
            Flag::new("🇦🇷".to_string()).unwrap(),
            "Argentina".to_string(),
        )
    }

    #[test]
    fn new_team_starts_with_empty_lists() {
        let team = argentina();

        assert_eq!(team.code().as_str(), "AR");
        assert_eq!(team.flag().as_str(), "🇦🇷");
        assert_eq!(team.name(), "Argentina");
        assert!(team.goals_scored().is_empty());
        assert!(team.goals_against().is_empty());
        assert_eq!(team.created_at(), team.updated_at());
    }

    #[test]
    fn push_goal_preserves_insertion_order() {
        let mut team = argentina();
        let first = GoalId::new();
        let second = GoalId::new();

        team.push_goal(GoalList::Scored, first);
        team.push_goal(GoalList::Scored, second);

        assert_eq!(team.goals_scored(), &[first, second]);
        assert!(team.goals_against().is_empty());
    }

    #[test]
    fn push_goal_allows_duplicates() {
        let mut team = argentina();
        let goal = GoalId::new();

        team.push_goal(GoalList::Against, goal);
        team.push_goal(GoalList::Against, goal);

        assert_eq!(team.goals_against(), &[goal, goal]);
    }

    #[test]
    fn push_goal_if_absent_skips_existing_reference() {
        let mut team = argentina();
        let goal = GoalId::new();

        assert!(team.push_goal_if_absent(GoalList::Scored, goal));
        assert!(!team.push_goal_if_absent(GoalList::Scored, goal));

        assert_eq!(team.goals_scored(), &[goal]);
    }

    #[test]
    fn pull_goal_removes_every_occurrence() {
        let mut team = argentina();
        let goal = GoalId::new();
        let other = GoalId::new();

        team.push_goal(GoalList::Scored, goal);
        team.push_goal(GoalList::Scored, other);
        team.push_goal(GoalList::Scored, goal);

        assert!(team.pull_goal(GoalList::Scored, goal));
        assert_eq!(team.goals_scored(), &[other]);
    }

    #[test]
    fn pull_goal_on_absent_reference_is_a_noop() {
        let mut team = argentina();

        assert!(!team.pull_goal(GoalList::Scored, GoalId::new()));
        assert!(team.goals_scored().is_empty());
    }

    #[test]
    fn pull_goal_only_touches_the_selected_list() {
        let mut team = argentina();
        let goal = GoalId::new();

        team.push_goal(GoalList::Scored, goal);
        team.push_goal(GoalList::Against, goal);

        assert!(team.pull_goal(GoalList::Scored, goal));
        assert_eq!(team.goals_against(), &[goal]);
    }

    #[test]
    fn apply_updates_named_fields_only() {
        let mut team = argentina();
        let goal = GoalId::new();
        team.push_goal(GoalList::Scored, goal);

        team.apply(TeamPatch {
            name: Some("La Albiceleste".to_string()),
            ..TeamPatch::default()
        });

        assert_eq!(team.name(), "La Albiceleste");
        assert_eq!(team.code().as_str(), "AR");
        assert_eq!(team.goals_scored(), &[goal]);
    }

    #[test]
    fn apply_replaces_code_and_flag() {
        let mut team = argentina();

        team.apply(TeamPatch {
            code: Some(TeamCode::new("BR".to_string()).unwrap()),
            flag: Some(Flag::new("🇧🇷".to_string()).unwrap()),
            name: None,
        });

        assert_eq!(team.code().as_str(), "BR");
        assert_eq!(team.flag().as_str(), "🇧🇷");
    }

    #[test]
    fn mutations_never_rewind_updated_at() {
        let mut team = argentina();
        let created = team.updated_at();

        team.push_goal(GoalList::Scored, GoalId::new());

        assert!(team.updated_at() >= created);
    }
}

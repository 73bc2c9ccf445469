use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::{bounded, ConsistencyManager};
use crate::domain::errors::DomainResult;
use crate::domain::goal::{Goal, GoalId};
use crate::domain::repositories::{GoalStore, TeamStore};
use crate::domain::team::TeamId;

/// Which of a team's reference lists a last-goal query searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalListSelector {
    /// Only the goals the team scored
    Scored,
    /// Only the goals scored against the team
    Against,
    /// The scored list followed by the against list
    #[default]
    Combined,
}

/// Resolves the latest goal recorded for a team
///
/// "Latest" means the maximum match minute; among equal minutes the entry
/// appearing last in list order wins, which is the most recently appended
/// reference.
pub struct LastGoalResolver {
    teams: Arc<dyn TeamStore>,
    goals: Arc<dyn GoalStore>,
    manager: Arc<ConsistencyManager>,
    op_timeout: Duration,
}

impl LastGoalResolver {
    pub fn new(
        teams: Arc<dyn TeamStore>,
        goals: Arc<dyn GoalStore>,
        manager: Arc<ConsistencyManager>,
        op_timeout: Duration,
    ) -> Self {
        Self {
            teams,
            goals,
            manager,
            op_timeout,
        }
    }

    /// Finds the latest goal on the selected list(s)
    ///
    /// An unknown team, an empty list, or a list whose references all
    /// point at deleted goals is an empty result, not an error.
    pub async fn find_last(
        &self,
        team: TeamId,
        lists: GoalListSelector,
    ) -> DomainResult<Option<Goal>> {
        let Some(team) = bounded(self.op_timeout, self.teams.get(team)).await? else {
            return Ok(None);
        };

        let ids: Vec<GoalId> = match lists {
            GoalListSelector::Scored => team.goals_scored().to_vec(),
            GoalListSelector::Against => team.goals_against().to_vec(),
            GoalListSelector::Combined => {
                let mut ids = team.goals_scored().to_vec();
                ids.extend_from_slice(team.goals_against());
                ids
            }
        };
        if ids.is_empty() {
            return Ok(None);
        }

        let mut goals = bounded(self.op_timeout, self.goals.get_many(&ids)).await?;
        // Stable ascending sort: the final element holds the maximum
        // minute, and equal minutes keep their list order so the last
        // appended entry wins the tie
        goals.sort_by_key(Goal::minute);
        Ok(goals.pop())
    }

    /// Resolves the latest goal and runs the deletion protocol on it
    ///
    /// Returns the deleted goal, or `None` when there was nothing to
    /// delete.
    pub async fn remove_last(
        &self,
        team: TeamId,
        lists: GoalListSelector,
    ) -> DomainResult<Option<Goal>> {
        match self.find_last(team, lists).await? {
            Some(goal) => self.manager.delete_goal(goal.id()).await.map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{Flag, Team, TeamCode};
    use crate::infrastructure::repositories::{MemoryDb, MemoryGoalStore, MemoryTeamStore};
    use crate::services::DEFAULT_STORE_TIMEOUT;

    async fn fixture() -> (LastGoalResolver, ConsistencyHandles, TeamId, TeamId) {
        let db = MemoryDb::new();
        let teams: Arc<dyn TeamStore> = Arc::new(MemoryTeamStore::new(db.clone()));
        let goals: Arc<dyn GoalStore> = Arc::new(MemoryGoalStore::new(db.clone()));

        let argentina = Team::new(
            TeamCode::new("AR".to_string()).unwrap(),
            Flag::new("🇦🇷".to_string()).unwrap(),
            "Argentina".to_string(),
        );
        let brazil = Team::new(
            TeamCode::new("BR".to_string()).unwrap(),
            Flag::new("🇧🇷".to_string()).unwrap(),
            "Brazil".to_string(),
        );
        let (ar, br) = (argentina.id(), brazil.id());
        teams.insert(argentina).await.unwrap();
        teams.insert(brazil).await.unwrap();

        let manager = Arc::new(ConsistencyManager::new(
            teams.clone(),
            goals.clone(),
            DEFAULT_STORE_TIMEOUT,
        ));
        let resolver = LastGoalResolver::new(
            teams,
            goals,
            manager.clone(),
            DEFAULT_STORE_TIMEOUT,
        );
        (resolver, ConsistencyHandles { manager, db }, ar, br)
    }

    struct ConsistencyHandles {
        manager: Arc<ConsistencyManager>,
        db: MemoryDb,
    }

    #[tokio::test]
    async fn picks_the_maximum_minute() {
        let (resolver, h, ar, br) = fixture().await;
        for minute in [12, 90, 45] {
            h.manager
                .create_goal(ar, br, format!("scorer {}", minute), minute)
                .await
                .unwrap();
        }

        let last = resolver
            .find_last(ar, GoalListSelector::Scored)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(last.minute(), 90);
    }

    #[tokio::test]
    async fn equal_minutes_resolve_to_the_latest_entry() {
        let (resolver, h, ar, br) = fixture().await;
        h.manager
            .create_goal(ar, br, "First".to_string(), 45)
            .await
            .unwrap();
        let second = h
            .manager
            .create_goal(ar, br, "Second".to_string(), 45)
            .await
            .unwrap();

        let last = resolver
            .find_last(ar, GoalListSelector::Scored)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(last.id(), second.id());
        assert_eq!(last.author(), "Second");
    }

    #[tokio::test]
    async fn combined_tie_prefers_the_against_list() {
        let (resolver, h, ar, br) = fixture().await;
        // Same minute on both of Argentina's lists; the against list is
        // searched after the scored list, so its entry wins the tie
        let _scored = h
            .manager
            .create_goal(ar, br, "Scored".to_string(), 45)
            .await
            .unwrap();
        let conceded = h
            .manager
            .create_goal(br, ar, "Conceded".to_string(), 45)
            .await
            .unwrap();

        let last = resolver
            .find_last(ar, GoalListSelector::Combined)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(last.id(), conceded.id());
    }

    #[tokio::test]
    async fn selector_narrows_the_search() {
        let (resolver, h, ar, br) = fixture().await;
        h.manager
            .create_goal(ar, br, "Scored".to_string(), 10)
            .await
            .unwrap();
        let conceded = h
            .manager
            .create_goal(br, ar, "Conceded".to_string(), 80)
            .await
            .unwrap();

        let scored_last = resolver
            .find_last(ar, GoalListSelector::Scored)
            .await
            .unwrap()
            .unwrap();
        let against_last = resolver
            .find_last(ar, GoalListSelector::Against)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(scored_last.minute(), 10);
        assert_eq!(against_last.id(), conceded.id());
    }

    #[tokio::test]
    async fn empty_list_yields_nothing() {
        let (resolver, _h, ar, _br) = fixture().await;

        let last = resolver.find_last(ar, GoalListSelector::Combined).await.unwrap();

        assert!(last.is_none());
    }

    #[tokio::test]
    async fn unknown_team_yields_nothing() {
        let (resolver, _h, _ar, _br) = fixture().await;

        let last = resolver
            .find_last(TeamId::new(), GoalListSelector::Combined)
            .await
            .unwrap();

        assert!(last.is_none());
    }

    #[tokio::test]
    async fn dangling_references_are_skipped() {
        let (resolver, h, ar, br) = fixture().await;
        let kept = h
            .manager
            .create_goal(ar, br, "Kept".to_string(), 10)
            .await
            .unwrap();
        let dangling = h
            .manager
            .create_goal(ar, br, "Dangling".to_string(), 90)
            .await
            .unwrap();
        // Delete the document but leave the reference behind
        h.db.goals().remove(dangling.id()).await;

        let last = resolver
            .find_last(ar, GoalListSelector::Scored)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(last.id(), kept.id());
    }

    #[tokio::test]
    async fn remove_last_deletes_exactly_the_resolved_goal() {
        let (resolver, h, ar, br) = fixture().await;
        let early = h
            .manager
            .create_goal(ar, br, "Early".to_string(), 12)
            .await
            .unwrap();
        let late = h
            .manager
            .create_goal(ar, br, "Late".to_string(), 90)
            .await
            .unwrap();

        let removed = resolver
            .remove_last(ar, GoalListSelector::Scored)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(removed.id(), late.id());
        assert!(h.db.goals().get(late.id()).await.is_none());
        assert!(h.db.goals().get(early.id()).await.is_some());
        assert_eq!(
            h.db.teams().get(ar).await.unwrap().goals_scored(),
            &[early.id()]
        );
    }

    #[tokio::test]
    async fn remove_last_on_an_empty_list_is_a_noop() {
        let (resolver, h, ar, _br) = fixture().await;

        let removed = resolver
            .remove_last(ar, GoalListSelector::Combined)
            .await
            .unwrap();

        assert!(removed.is_none());
        assert_eq!(h.db.goals().len().await, 0);
    }

    #[test]
    fn selector_parses_from_query_values() {
        #[derive(Deserialize)]
        struct Q {
            list: GoalListSelector,
        }

        let q: Q = serde_json::from_str(r#"{"list":"scored"}"#).unwrap();
        assert_eq!(q.list, GoalListSelector::Scored);
        let q: Q = serde_json::from_str(r#"{"list":"against"}"#).unwrap();
        assert_eq!(q.list, GoalListSelector::Against);
        let q: Q = serde_json::from_str(r#"{"list":"combined"}"#).unwrap();
        assert_eq!(q.list, GoalListSelector::Combined);
    }
}

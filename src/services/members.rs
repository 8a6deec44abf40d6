//! Member management service

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow::MemberHistory,
        member::{CreateMember, Member, MemberQuery, UpdateMember},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List members, optionally filtered
    pub async fn list_members(&self, query: &MemberQuery) -> Vec<Member> {
        let mut members = self.repository.members.list().await;

        if let Some(name) = &query.name {
            let needle = name.to_lowercase();
            members.retain(|m| m.name.to_lowercase().contains(&needle));
        }
        if let Some(membership_type) = &query.membership_type {
            members.retain(|m| m.membership_type.eq_ignore_ascii_case(membership_type));
        }
        if let Some(active) = query.active {
            members.retain(|m| m.active == active);
        }

        members
    }

    pub async fn get_member(&self, id: i32) -> AppResult<Member> {
        self.repository
            .members
            .find_by_id(id)
            .await
            .ok_or(AppError::MemberNotFound(id))
    }

    pub async fn create_member(&self, member: CreateMember) -> AppResult<Member> {
        let created = self.repository.members.insert(member).await?;
        tracing::info!(user_id = created.id, "member registered");
        Ok(created)
    }

    pub async fn update_member(&self, id: i32, changes: UpdateMember) -> AppResult<Member> {
        self.repository.members.update(id, changes).await
    }

    /// A member and every ledger record carrying their id
    pub async fn member_history(&self, id: i32) -> AppResult<MemberHistory> {
        let user = self.get_member(id).await?;
        let borrowing_history = self.repository.ledger.for_member(id).await;
        Ok(MemberHistory {
            user,
            borrowing_history,
        })
    }
}

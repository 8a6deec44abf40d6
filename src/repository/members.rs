//! Member directory repository over the members collection

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
    store::{next_id, Collection, Identified, JsonStore},
};

impl Identified for Member {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone)]
pub struct MemberDirectory {
    collection: Collection<Member>,
}

impl MemberDirectory {
    pub fn new(store: &JsonStore) -> Self {
        Self {
            collection: store.collection("members"),
        }
    }

    pub async fn list(&self) -> Vec<Member> {
        self.collection.load().await
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Member> {
        self.collection.load().await.into_iter().find(|m| m.id == id)
    }

    /// Register a new member. The join date is stamped here and never
    /// changes afterwards; accounts start active.
    pub async fn insert(&self, create: CreateMember) -> AppResult<Member> {
        let _guard = self.collection.lock().await;
        let mut members = self.collection.load().await;

        let member = Member {
            id: next_id(&members),
            name: create.name,
            email: create.email,
            phone: create.phone,
            membership_type: create.membership_type.unwrap_or_else(|| "standard".to_string()),
            join_date: Utc::now().date_naive(),
            active: true,
        };

        members.push(member.clone());
        self.collection.save(&members).await?;
        Ok(member)
    }

    /// Update profile and subscription fields. The join date is immutable.
    pub async fn update(&self, id: i32, changes: UpdateMember) -> AppResult<Member> {
        let _guard = self.collection.lock().await;
        let mut members = self.collection.load().await;

        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(AppError::MemberNotFound(id))?;

        if let Some(name) = changes.name {
            member.name = name;
        }
        if let Some(email) = changes.email {
            member.email = email;
        }
        if let Some(phone) = changes.phone {
            member.phone = Some(phone);
        }
        if let Some(membership_type) = changes.membership_type {
            member.membership_type = membership_type;
        }
        if let Some(active) = changes.active {
            member.active = active;
        }

        let updated = member.clone();
        self.collection.save(&members).await?;
        Ok(updated)
    }
}

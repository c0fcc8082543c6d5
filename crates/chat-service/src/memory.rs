//! In-memory repositories
//!
//! Backs every repository trait with maps behind one lock. Used by tests and
//! local development. Only password hashes are stored.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chat_core::entities::{Attachment, Channel, ChannelRole, Message, User};
use chat_core::traits::{
    AttachmentRepository, ChannelRepository, MessageRepository, RepoResult, UserRepository,
};
use chat_core::DomainError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::ServiceContext;

#[derive(Debug, Default)]
struct State {
    users: HashMap<Uuid, User>,
    password_hashes: HashMap<Uuid, String>,
    channels: HashMap<Uuid, Channel>,
    members: HashMap<Uuid, Vec<(Uuid, ChannelRole)>>,
    messages: HashMap<Uuid, Message>,
    attachments: HashMap<Uuid, Attachment>,
}

/// Store implementing all repository traits
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service context whose repositories all point at this store
    pub fn context(self: &Arc<Self>) -> ServiceContext {
        ServiceContext::new(self.clone(), self.clone(), self.clone(), self.clone())
    }

    pub fn into_context(self) -> ServiceContext {
        Arc::new(self).context()
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn channel_count(&self) -> usize {
        self.state.read().await.channels.len()
    }

    pub async fn message_count(&self) -> usize {
        self.state.read().await.messages.len()
    }

    pub async fn attachment_count(&self) -> usize {
        self.state.read().await.attachments.len()
    }

    /// Members of a channel in join order
    pub async fn members(&self, channel_id: Uuid) -> Vec<(Uuid, ChannelRole)> {
        self.state
            .read()
            .await
            .members
            .get(&channel_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        state.users.insert(user.id, user.clone());
        state
            .password_hashes
            .insert(user.id, password_hash.to_string());
        Ok(())
    }

    async fn get_password_hash(&self, user_id: Uuid) -> RepoResult<Option<String>> {
        Ok(self.state.read().await.password_hashes.get(&user_id).cloned())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.write().await;
        let slot = state
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        *slot = user.clone();
        Ok(())
    }
}

#[async_trait]
impl ChannelRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Channel>> {
        Ok(self.state.read().await.channels.get(&id).cloned())
    }

    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let state = self.state.read().await;
        Ok(state.channels.values().any(|c| c.name == name))
    }

    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        let mut state = self.state.write().await;
        if state.channels.values().any(|c| c.name == channel.name) {
            return Err(DomainError::ChannelNameExists);
        }
        state.channels.insert(channel.id, channel.clone());
        Ok(())
    }

    async fn add_member(
        &self,
        channel_id: Uuid,
        user_id: Uuid,
        role: ChannelRole,
    ) -> RepoResult<()> {
        let mut state = self.state.write().await;
        if !state.channels.contains_key(&channel_id) {
            return Err(DomainError::ChannelNotFound(channel_id));
        }
        let members = state.members.entry(channel_id).or_default();
        match members.iter_mut().find(|(id, _)| *id == user_id) {
            Some(member) => member.1 = role,
            None => members.push((user_id, role)),
        }
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        Ok(self.state.read().await.messages.get(&id).cloned())
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        let mut state = self.state.write().await;
        state.messages.insert(message.id, message.clone());
        Ok(())
    }

    async fn update(&self, message: &Message) -> RepoResult<()> {
        let mut state = self.state.write().await;
        let slot = state
            .messages
            .get_mut(&message.id)
            .ok_or(DomainError::MessageNotFound(message.id))?;
        *slot = message.clone();
        Ok(())
    }
}

#[async_trait]
impl AttachmentRepository for InMemoryStore {
    async fn create(&self, attachment: &Attachment) -> RepoResult<()> {
        let mut state = self.state.write().await;
        state.attachments.insert(attachment.id, attachment.clone());
        Ok(())
    }
}

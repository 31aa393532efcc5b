//! Conversation Controller (Use Case)
//!
//! Turns chat events into searches and browsing, one state per chat.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use bargain::{
    ChatEvent, ChatEventHandler, ChatId, ChatState, ChatTransport, MarketplaceSearch, MessageRef,
    NavAction, OfferRanker, Reply, SearchSession,
};

use super::offer_fetcher::OfferFetcher;

pub const START_COMMAND: &str = "/start";

pub const START_PROMPT: &str = "Tell me what you want to find";
pub const SEARCH_STARTED: &str = "Search started, please wait...";
pub const SEARCH_FAILED: &str = "An error occurred while fetching offers.";
pub const NO_RESULTS: &str = "No offers with a valid price were found.";
pub const NO_OFFERS_BELOW_AVERAGE: &str = "No offers below the average price.";

/// Application service driving the per-chat Idle/Browsing state machine
///
/// Events for one chat are serialized by that chat's mutex, which is held
/// for the whole event including the page fetches. A button press that
/// arrives during a search waits for the search to finish.
pub struct ConversationController<M: MarketplaceSearch, T: ChatTransport> {
    fetcher: OfferFetcher<M>,
    transport: Arc<T>,
    chats: DashMap<ChatId, Arc<Mutex<ChatState>>>,
}

impl<M: MarketplaceSearch, T: ChatTransport> ConversationController<M, T> {
    pub fn new(fetcher: OfferFetcher<M>, transport: Arc<T>) -> Self {
        Self {
            fetcher,
            transport,
            chats: DashMap::new(),
        }
    }

    /// Handle one inbound event
    pub async fn handle_event(&self, event: ChatEvent) {
        match event {
            ChatEvent::Text { chat_id, text } => self.on_text(chat_id, &text).await,
            ChatEvent::Callback {
                chat_id,
                action,
                message_ref,
            } => self.on_navigate(chat_id, action, message_ref).await,
        }
    }

    fn chat(&self, chat_id: ChatId) -> Arc<Mutex<ChatState>> {
        self.chats.entry(chat_id).or_default().value().clone()
    }

    async fn on_text(&self, chat_id: ChatId, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        let chat = self.chat(chat_id);
        let mut state = chat.lock().await;

        if text.trim() == START_COMMAND {
            self.reply(chat_id, &Reply::text(START_PROMPT)).await;
            return;
        }

        if let Some(session) = &state.session {
            tracing::debug!(
                chat_id = %chat_id,
                previous_query = %session.query(),
                age_secs = (Utc::now() - session.started_at()).num_seconds(),
                "Replacing search session"
            );
        }

        if let Some(old_view) = state.reset() {
            if let Err(e) = self.transport.delete(chat_id, old_view).await {
                tracing::warn!(chat_id = %chat_id, error = %e, "Failed to retract previous view");
            }
        }

        self.reply(chat_id, &Reply::text(SEARCH_STARTED)).await;
        tracing::info!(chat_id = %chat_id, query = %text, "🔍 Search started");

        let listings = match self.fetcher.fetch(text).await {
            Ok(listings) => listings,
            Err(e) => {
                tracing::error!(chat_id = %chat_id, error = %e, "Search failed");
                self.reply(chat_id, &Reply::text(SEARCH_FAILED)).await;
                return;
            }
        };

        let ranked = match OfferRanker::rank(listings) {
            Ok(ranked) => ranked,
            Err(e) if e.is_empty_result() => {
                tracing::info!(chat_id = %chat_id, reason = %e, "No results");
                self.reply(chat_id, &Reply::text(NO_RESULTS)).await;
                return;
            }
            Err(e) => {
                tracing::error!(chat_id = %chat_id, error = %e, "Ranking failed");
                self.reply(chat_id, &Reply::text(SEARCH_FAILED)).await;
                return;
            }
        };

        let Some(session) = SearchSession::start(text, ranked) else {
            self.reply(chat_id, &Reply::text(NO_OFFERS_BELOW_AVERAGE))
                .await;
            return;
        };

        tracing::info!(
            chat_id = %chat_id,
            offers = session.listings().len(),
            "✅ Offers below average ready"
        );

        if let Some(view) = self.reply(chat_id, &render(&session)).await {
            state.view = Some(view);
            state.session = Some(session);
        }
    }

    async fn on_navigate(&self, chat_id: ChatId, action: NavAction, message_ref: MessageRef) {
        let Some(chat) = self.chats.get(&chat_id).map(|entry| entry.value().clone()) else {
            tracing::debug!(chat_id = %chat_id, "Ignoring navigation without a session");
            return;
        };
        let mut state = chat.lock().await;

        if !state.owns_view(message_ref) {
            tracing::debug!(
                chat_id = %chat_id,
                message_ref = %message_ref,
                "Ignoring navigation on a stale view"
            );
            return;
        }

        let Some(session) = state.session.as_mut() else {
            return;
        };

        session.navigate(action);
        let reply = render(session);

        if let Err(e) = self.transport.edit(chat_id, message_ref, &reply).await {
            tracing::error!(chat_id = %chat_id, error = %e, "Failed to update view");
        }
    }

    /// Send a reply, logging delivery failures
    async fn reply(&self, chat_id: ChatId, reply: &Reply) -> Option<MessageRef> {
        self.transport
            .send(chat_id, reply)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    chat_id = %chat_id,
                    transport = %self.transport.name(),
                    error = %e,
                    "Failed to send reply"
                )
            })
            .ok()
    }
}

#[async_trait]
impl<M, T> ChatEventHandler for ConversationController<M, T>
where
    M: MarketplaceSearch + 'static,
    T: ChatTransport + 'static,
{
    async fn handle(&self, event: ChatEvent) {
        self.handle_event(event).await
    }
}

/// Listing under the cursor plus the buttons valid at that position
fn render(session: &SearchSession) -> Reply {
    Reply::text(session.current().render()).with_buttons(session.buttons())
}

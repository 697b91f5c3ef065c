// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The shell listens to nothing on its own; keyboard routing is delegated
//! to the feed, which subscribes only while the composer is open.

use super::Message;
use crate::ui::feed;
use iced::Subscription;

/// Builds the application subscription from the feed's current state.
pub fn create(feed: &feed::State) -> Subscription<Message> {
    feed.subscription().map(Message::Feed)
}

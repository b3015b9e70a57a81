// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions: the playback frame clock and the notification
//! auto-dismiss tick. Both run only while they have work to do.

use super::{App, Message};
use crate::preview::Preview;
use iced::time;
use iced::Subscription;
use std::time::Duration;

/// Granularity of the notification auto-dismiss check.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if let Some(interval) = self.preview.as_ref().and_then(Preview::frame_interval) {
            subscriptions.push(time::every(interval).map(Message::FrameTick));
        }

        if self.notifications.has_notifications() {
            subscriptions.push(time::every(NOTIFICATION_TICK).map(Message::NotificationTick));
        }

        Subscription::batch(subscriptions)
    }
}

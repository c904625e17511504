// SPDX-License-Identifier: GPL-3.0-only

//! UI Navigation handlers
//!
//! Handles context pages, external URLs, and the notice banner.

use crate::app::state::{AppModel, ContextPage, Message, Notice};
use crate::constants::timing;
use cosmic::Task;
use tracing::error;

impl AppModel {
    // =========================================================================
    // UI Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    // =========================================================================
    // Notice Banner Handlers
    // =========================================================================

    /// Show a banner and schedule its auto-dismiss.
    ///
    /// Each banner gets a fresh stamp; a dismiss timer fired for an earlier
    /// banner leaves a newer one alone.
    pub(crate) fn push_notice(&mut self, notice: Notice) -> Task<cosmic::Action<Message>> {
        self.notice_seq += 1;
        self.notice = Some(notice);
        Self::delay_task(
            timing::NOTICE_DISMISS_MS,
            Message::DismissNotice(self.notice_seq),
        )
    }

    pub(crate) fn handle_dismiss_notice(&mut self, seq: u64) -> Task<cosmic::Action<Message>> {
        if seq == self.notice_seq {
            self.notice = None;
        }
        Task::none()
    }
}

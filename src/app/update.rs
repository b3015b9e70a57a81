// SPDX-License-Identifier: MPL-2.0
//! The application update loop.

use super::{App, Message, Screen};
use crate::preview::{self, Preview, RenderedAnimation, DOWNLOAD_FILE_NAME};
use crate::submission::{self, SubmissionError};
use crate::ui::navbar::BackendStatus;
use crate::ui::{help, notifications};
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(msg) => {
                self.form.update(msg);
                Task::none()
            }
            Message::SwitchScreen(screen) => {
                self.screen = screen;
                Task::none()
            }
            Message::Help(msg) => {
                if let help::Event::BackToForm = help::update(&mut self.help_state, msg) {
                    self.screen = Screen::Form;
                }
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(msg);
                Task::none()
            }
            Message::Submit => self.submit(),
            Message::SubmissionCompleted { seq, result } => {
                self.submission_completed(seq, result)
            }
            Message::PreviewDecoded { seq, result } => {
                if seq != self.latest_seq {
                    tracing::debug!(seq, latest = self.latest_seq, "stale decode discarded");
                    return Task::none();
                }
                let Some(preview) = &mut self.preview else {
                    return Task::none();
                };
                match result {
                    Ok(frames) => preview.set_frames(frames),
                    Err(err) => {
                        tracing::warn!(error = %err, "preview decoding failed");
                        preview.mark_decode_failed();
                        self.notifications
                            .push(notifications::Notification::warning(err.i18n_key()));
                    }
                }
                Task::none()
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Task::none()
            }
            Message::Download => self.open_save_dialog(),
            Message::SaveDialogResult(path) => {
                if let Some(path) = path {
                    self.save_animation(&path);
                }
                Task::none()
            }
            Message::TogglePlayback => {
                if let Some(preview) = &mut self.preview {
                    preview.toggle_playback();
                }
                Task::none()
            }
            Message::FrameTick(_) => {
                if let Some(preview) = &mut self.preview {
                    preview.advance_frame();
                }
                Task::none()
            }
            Message::NotificationTick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::HealthChecked(reachable) => {
                self.backend = if reachable {
                    BackendStatus::Reachable
                } else {
                    BackendStatus::Unreachable
                };
                tracing::info!(reachable, "backend probe finished");
                Task::none()
            }
        }
    }

    /// Issues a submission with a fresh sequence number. The previous result
    /// and error are cleared immediately so the UI reflects the new attempt.
    fn submit(&mut self) -> Task<Message> {
        let request = self.form.snapshot();

        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.submitting = true;
        self.error = None;
        self.show_error_details = false;
        self.preview = None;

        tracing::info!(seq, diagrams = request.diagrams.len(), "submitting form");

        let base_url = self.base_url.clone();
        Task::perform(submission::submit(base_url, request), move |result| {
            Message::SubmissionCompleted { seq, result }
        })
    }

    fn submission_completed(
        &mut self,
        seq: u64,
        result: Result<Vec<u8>, SubmissionError>,
    ) -> Task<Message> {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "stale completion discarded");
            return Task::none();
        }
        self.submitting = false;

        match result {
            Ok(bytes) => {
                tracing::info!(seq, len = bytes.len(), "submission succeeded");
                self.backend = BackendStatus::Reachable;
                match RenderedAnimation::new(bytes) {
                    Ok(animation) => {
                        let path = animation.path().to_path_buf();
                        self.preview = Some(Preview::new(animation));
                        Task::perform(
                            async move {
                                tokio::task::spawn_blocking(move || {
                                    preview::decoder::decode(&path)
                                })
                                .await
                                .unwrap_or_else(|err| {
                                    Err(preview::PreviewError::Decode(err.to_string()))
                                })
                            },
                            move |result| Message::PreviewDecoded { seq, result },
                        )
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to stage animation scratch file");
                        self.notifications.push(notifications::Notification::error(
                            "notification-scratch-error",
                        ));
                        Task::none()
                    }
                }
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "submission failed");
                if matches!(err, SubmissionError::Network(_)) {
                    self.backend = BackendStatus::Unreachable;
                }
                self.error = Some(err);
                Task::none()
            }
        }
    }

    fn open_save_dialog(&self) -> Task<Message> {
        if self.preview.is_none() {
            return Task::none();
        }

        let mut dialog = rfd::AsyncFileDialog::new().set_file_name(DOWNLOAD_FILE_NAME);
        if let Some(dir) = &self.last_save_dir {
            dialog = dialog.set_directory(dir);
        }

        Task::perform(
            async move {
                dialog
                    .save_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::SaveDialogResult,
        )
    }

    fn save_animation(&mut self, path: &std::path::Path) {
        let Some(preview) = &self.preview else {
            return;
        };
        match preview.animation().save_to(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "animation saved");
                self.last_save_dir = path.parent().map(|dir| dir.to_path_buf());
                self.notifications
                    .push(notifications::Notification::success(
                        "notification-save-success",
                    ));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "saving animation failed");
                self.notifications
                    .push(notifications::Notification::error("notification-save-error"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::form;
    use crate::i18n::fluent::I18n;
    use crate::preview::DecodedAnimation;
    use iced::widget::image;

    fn test_app() -> App {
        App {
            i18n: I18n::default(),
            screen: Screen::Form,
            form: form::State::new(),
            base_url: "http://127.0.0.1:8000/".to_string(),
            submitting: false,
            latest_seq: 0,
            preview: None,
            error: None,
            show_error_details: false,
            backend: BackendStatus::Unknown,
            help_state: help::State::new(),
            notifications: notifications::Manager::new(),
            last_save_dir: None,
        }
    }

    fn decoded(frame_count: usize) -> DecodedAnimation {
        DecodedAnimation {
            frames: (0..frame_count)
                .map(|_| image::Handle::from_rgba(1, 1, vec![0_u8; 4]))
                .collect(),
            frame_rate: 15.0,
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn flags_default_to_no_overrides() {
        let flags = Flags::default();
        assert!(flags.language.is_none());
        assert!(flags.endpoint.is_none());
    }

    #[test]
    fn submit_clears_previous_result_and_error() {
        let mut app = test_app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(vec![1_u8, 2, 3]),
        });
        app.error = Some(SubmissionError::BackendSignaled);
        app.show_error_details = true;

        let _ = app.update(Message::Submit);

        assert!(app.submitting);
        assert_eq!(app.latest_seq, 2);
        assert!(app.preview.is_none());
        assert!(app.error.is_none());
        assert!(!app.show_error_details);
    }

    #[test]
    fn successful_completion_stores_the_exact_bytes() {
        let mut app = test_app();
        let bytes = vec![0_u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(bytes.clone()),
        });

        assert!(!app.submitting);
        assert!(app.error.is_none());
        let preview = app.preview.as_ref().expect("preview should exist");
        assert_eq!(preview.animation().bytes(), bytes.as_slice());
        assert!(preview.is_decoding());
    }

    #[test]
    fn backend_signal_surfaces_as_error_without_preview() {
        let mut app = test_app();

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Err(SubmissionError::BackendSignaled),
        });

        assert!(!app.submitting);
        assert_eq!(app.error, Some(SubmissionError::BackendSignaled));
        assert!(app.preview.is_none());
    }

    #[test]
    fn network_failure_marks_backend_unreachable() {
        let mut app = test_app();

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Err(SubmissionError::Network("connection refused".to_string())),
        });

        assert_eq!(app.backend, BackendStatus::Unreachable);
    }

    #[test]
    fn resubmission_is_accepted_while_one_is_in_flight() {
        let mut app = test_app();

        let _ = app.update(Message::Submit);
        assert!(app.submitting);

        // The form never locks out a new attempt; it supersedes the old one.
        let _ = app.update(Message::Submit);
        assert!(app.submitting);
        assert_eq!(app.latest_seq, 2);

        let _ = app.update(Message::SubmissionCompleted {
            seq: 2,
            result: Ok(vec![1_u8; 4]),
        });
        assert!(!app.submitting);
        assert!(app.preview.is_some());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = test_app();

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Submit);
        assert_eq!(app.latest_seq, 2);

        // The first submission resolves after the second was issued.
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(vec![0xAA_u8; 4]),
        });
        assert!(app.submitting);
        assert!(app.preview.is_none());

        let _ = app.update(Message::SubmissionCompleted {
            seq: 2,
            result: Ok(vec![0xBB_u8; 4]),
        });
        assert!(!app.submitting);
        assert_eq!(
            app.preview.as_ref().map(|p| p.animation().bytes().to_vec()),
            Some(vec![0xBB_u8; 4])
        );
    }

    #[test]
    fn stale_decode_result_is_discarded() {
        let mut app = test_app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(vec![0_u8; 4]),
        });

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::PreviewDecoded {
            seq: 1,
            result: Ok(decoded(3)),
        });

        // The new submission already cleared the preview.
        assert!(app.preview.is_none());
    }

    #[test]
    fn decode_failure_keeps_the_download_available() {
        let mut app = test_app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(vec![7_u8; 8]),
        });

        let _ = app.update(Message::PreviewDecoded {
            seq: 1,
            result: Err(preview::PreviewError::NoVideoStream),
        });

        let preview = app.preview.as_ref().expect("preview should exist");
        assert!(preview.decode_failed());
        assert_eq!(preview.animation().bytes(), &[7_u8; 8]);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn decoded_frames_start_playback() {
        let mut app = test_app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(vec![0_u8; 4]),
        });

        let _ = app.update(Message::PreviewDecoded {
            seq: 1,
            result: Ok(decoded(3)),
        });

        let preview = app.preview.as_ref().expect("preview should exist");
        assert!(preview.is_playing());
        assert!(preview.current_handle().is_some());
    }

    #[test]
    fn save_dialog_result_writes_the_animation() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join(DOWNLOAD_FILE_NAME);

        let mut app = test_app();
        let bytes = vec![42_u8; 16];
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(bytes.clone()),
        });

        let _ = app.update(Message::SaveDialogResult(Some(target.clone())));

        assert_eq!(std::fs::read(&target).expect("saved file"), bytes);
        assert_eq!(app.last_save_dir.as_deref(), Some(dir.path()));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn cancelled_save_dialog_changes_nothing() {
        let mut app = test_app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::SubmissionCompleted {
            seq: 1,
            result: Ok(vec![1_u8; 4]),
        });

        let _ = app.update(Message::SaveDialogResult(None));

        assert!(app.last_save_dir.is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn health_probe_updates_the_status() {
        let mut app = test_app();
        let _ = app.update(Message::HealthChecked(true));
        assert_eq!(app.backend, BackendStatus::Reachable);
        let _ = app.update(Message::HealthChecked(false));
        assert_eq!(app.backend, BackendStatus::Unreachable);
    }

    #[test]
    fn help_back_event_returns_to_the_form() {
        let mut app = test_app();
        let _ = app.update(Message::SwitchScreen(Screen::Help));
        assert_eq!(app.screen, Screen::Help);

        let _ = app.update(Message::Help(help::Message::BackToForm));
        assert_eq!(app.screen, Screen::Form);
    }

    #[test]
    fn form_messages_reach_the_store() {
        let mut app = test_app();
        let _ = app.update(Message::Form(form::Message::AddDiagram));
        assert_eq!(app.form.diagrams().len(), 2);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for Viewfinder
//!
//! This module contains the application state, message handling, UI rendering,
//! and business logic for the camera app.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, AccessGate, etc.)
//! - `controls`: Capture button, recording indicator, settings controls
//! - `gallery_strip`: Recent-captures strip along the bottom edge
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering (access gate views and capture surface)
//! - `update`: Message handling
//!
//! # Main Types
//!
//! - `AppModel`: Main application state around the capture device and library
//! - `Message`: All possible user interactions and system events
//! - `AccessGate`: Combined camera + library permission state

mod controls;
mod gallery_strip;
mod handlers;
mod settings;
mod state;
mod update;
mod view;

use crate::capture::{CameraFacing, CaptureSettings, PermissionStatus};
use crate::config::Config;
use crate::constants::synthetic;
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AccessGate, AppModel, ContextPage, Message, Notice, RecordingState};
use std::sync::Arc;
use tracing::{error, info, warn};

const REPOSITORY: &str = "https://github.com/pocketlens/viewfinder";
const SUPPORT: &str = "https://github.com/pocketlens/viewfinder/issues";
const APP_ICON: &[u8] = include_bytes!(
    "../../resources/icons/hicolor/scalable/apps/io.github.pocketlens.viewfinder.svg"
);

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.pocketlens.viewfinder";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY), (fl!("support"), SUPPORT)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        let device = crate::capture::default_device();
        let library = crate::library::default_library(&config.save_folder_name);
        info!(device = device.name(), "Capture device ready");

        let settings = CaptureSettings {
            facing: config.default_facing,
            ..Default::default()
        };

        let folder_name_input = config.save_folder_name.clone();
        let theme = config.app_theme.theme();

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            device,
            library: Arc::clone(&library),
            access: AccessGate::default(),
            settings,
            recording: RecordingState::default(),
            shutter_active: false,
            assets: Vec::new(),
            thumbnails: std::collections::HashMap::new(),
            preview: None,
            notice: None,
            notice_seq: 0,
            last_report_path: None,
            folder_name_input,
            app_theme_options: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            facing_options: CameraFacing::ALL
                .iter()
                .map(|facing| match facing {
                    CameraFacing::Front => fl!("facing-front"),
                    CameraFacing::Back => fl!("facing-back"),
                })
                .collect(),
        };

        // Resolve both access requests up front: the camera portal first,
        // then the library probe. One message delivers the combined result.
        let access_task = Task::perform(
            async move {
                let camera = crate::portal::request_camera_access().await;
                let library = tokio::task::spawn_blocking(move || library.request_permission())
                    .await
                    .unwrap_or(PermissionStatus::Denied);
                (camera, library)
            },
            |(camera, library)| cosmic::Action::App(Message::AccessResolved { camera, library }),
        );

        let theme_task = cosmic::command::set_theme(theme);

        (app, Task::batch([access_task, theme_task]))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        use cosmic::iced::futures::SinkExt;

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Viewfinder stream: renders frames with the live settings at the
        // device frame rate. The subscription id carries the settings, so a
        // facing/flash/zoom change restarts the stream with fresh values.
        let viewfinder_sub = match self.access.overall() {
            PermissionStatus::Granted => {
                let settings = self.settings;
                let zoom_milli = (settings.zoom * 1000.0).round() as i32;

                Subscription::run_with_id(
                    ("viewfinder", settings.facing, settings.flash, zoom_milli),
                    cosmic::iced::stream::channel(4, move |mut output| async move {
                        info!(facing = ?settings.facing, "Viewfinder stream started");

                        let mut tick = 0u32;
                        loop {
                            let rendered = tokio::task::spawn_blocking(move || {
                                crate::capture::synthetic::render_frame(&settings, tick)
                            })
                            .await;

                            let Ok(frame) = rendered else {
                                warn!("Viewfinder render task aborted");
                                break;
                            };

                            let (width, height) = frame.dimensions();
                            let handle = cosmic::widget::image::Handle::from_rgba(
                                width,
                                height,
                                frame.into_raw(),
                            );

                            if output.send(Message::PreviewRendered(handle)).await.is_err() {
                                info!("Viewfinder stream cancelled");
                                break;
                            }

                            tick = tick.wrapping_add(1);
                            tokio::time::sleep(synthetic::FRAME_INTERVAL).await;
                        }
                    }),
                )
            }
            _ => Subscription::none(),
        };

        Subscription::batch([config_sub, viewfinder_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

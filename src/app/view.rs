// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Renders one of three mutually exclusive screens depending on access state:
//! - Requesting: access to the camera and library is still being resolved
//! - Denied: terminal for the rest of the session, no retry offered
//! - Viewfinder: live preview with capture controls and the gallery strip

use crate::app::state::{AppModel, Message};
use crate::capture::PermissionStatus;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget::{self, icon};

/// Flash icon SVG (lightning bolt)
const FLASH_ICON: &[u8] = include_bytes!("../../resources/button_icons/flash.svg");
/// Flash off icon SVG (lightning bolt with strike-through)
const FLASH_OFF_ICON: &[u8] = include_bytes!("../../resources/button_icons/flash-off.svg");

/// Translucent dark backdrop for controls drawn over the preview
pub(crate) fn overlay_container_style(_theme: &cosmic::Theme) -> widget::container::Style {
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            crate::constants::ui::OVERLAY_BACKGROUND_ALPHA,
        ))),
        border: cosmic::iced::Border {
            radius: [8.0; 4].into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the main application view
    ///
    /// Dispatches on the combined access state. The viewfinder only exists
    /// once both the camera and the library have been granted.
    pub fn view(&self) -> Element<'_, Message> {
        match self.access.overall() {
            PermissionStatus::Unknown => self.requesting_view(),
            PermissionStatus::Denied => self.denied_view(),
            PermissionStatus::Granted => self.viewfinder_view(),
        }
    }

    /// Placeholder screen shown while access prompts are outstanding
    fn requesting_view(&self) -> Element<'_, Message> {
        self.status_screen("camera-photo-symbolic", fl!("requesting-access"))
    }

    /// Terminal screen shown when camera or library access was refused
    fn denied_view(&self) -> Element<'_, Message> {
        self.status_screen("action-unavailable-symbolic", fl!("access-denied"))
    }

    /// Centered icon and message on the usual black backdrop
    fn status_screen(&self, icon_name: &'static str, text: String) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let content = widget::column()
            .push(icon::from_name(icon_name).size(48))
            .push(widget::text(text))
            .spacing(spacing.space_s)
            .align_x(Alignment::Center);

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                text_color: Some(Color::WHITE),
                ..Default::default()
            })
            .into()
    }

    /// Build the full viewfinder screen
    ///
    /// Layered layout: preview with top bar and notice overlays, then zoom
    /// controls, the capture row and the gallery strip below it.
    fn viewfinder_view(&self) -> Element<'_, Message> {
        let preview = self.build_preview();

        // Shutter feedback - show only preview with white overlay, no UI
        if self.shutter_active {
            let shutter_overlay = widget::container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| widget::container::Style {
                    background: Some(Background::Color(Color::WHITE)),
                    ..Default::default()
                });

            return widget::container(
                cosmic::iced::widget::stack![preview, shutter_overlay]
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into();
        }

        // Preview with top bar and optional notice banner overlaid
        let mut preview_stack = cosmic::iced::widget::stack![
            preview,
            widget::container(self.build_top_bar())
                .width(Length::Fill)
                .align_y(cosmic::iced::alignment::Vertical::Top)
        ];

        // Notices float over the bottom edge of the preview
        if let Some(banner) = self.build_notice_banner() {
            preview_stack = preview_stack.push(
                widget::container(banner)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(cosmic::iced::alignment::Horizontal::Center)
                    .align_y(cosmic::iced::alignment::Vertical::Bottom)
                    .padding([0, 0, 8, 0]),
            );
        }

        let preview_with_overlays = preview_stack.width(Length::Fill).height(Length::Fill);

        // Column layout: preview with overlays, zoom controls, capture row, gallery strip
        let main_column = widget::column()
            .push(preview_with_overlays)
            .push(self.build_zoom_controls())
            .push(self.build_capture_row())
            .push(self.build_gallery_strip())
            .width(Length::Fill)
            .height(Length::Fill);

        // Wrap everything in a black background container
        widget::container(main_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Build the preview area from the latest rendered frame
    fn build_preview(&self) -> Element<'_, Message> {
        match &self.preview {
            Some(handle) => widget::image::Image::new(handle.clone())
                .content_fit(cosmic::iced::ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            // First frame has not arrived yet
            None => widget::container(icon::from_name("camera-photo-symbolic").size(64))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill)
                .into(),
        }
    }

    /// Build the top bar with recording indicator and flash toggle
    fn build_top_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut row = widget::row()
            .padding(spacing.space_xs)
            .align_y(Alignment::Center);

        // Show recording indicator with elapsed time while a clip is running
        if let Some(indicator) = self.build_recording_indicator() {
            row = row.push(indicator);
            row = row.push(widget::horizontal_space().width(spacing.space_s));
        }

        // Right side buttons
        row = row.push(widget::Space::new(Length::Fill, Length::Shrink));

        // Flash toggle button
        let flash_on = self.settings.flash.is_on();
        let flash_icon_bytes = if flash_on { FLASH_ICON } else { FLASH_OFF_ICON };
        let flash_icon = widget::icon::from_svg_bytes(flash_icon_bytes).symbolic(true);

        row = row.push(
            widget::button::icon(flash_icon)
                .on_press(Message::ToggleFlash)
                .class(if flash_on {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Standard
                }),
        );

        widget::container(row)
            .width(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::TRANSPARENT)),
                ..Default::default()
            })
            .into()
    }

    /// Build the capture row: facing flip, photo shutter and record toggle
    ///
    /// The shutter stays centered regardless of the side buttons, matching
    /// the fixed-size wrappers the buttons themselves use.
    fn build_capture_row(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let row = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_flip_button())
            .push(self.build_capture_button())
            .push(self.build_record_button())
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .spacing(spacing.space_l)
            .align_y(Alignment::Center)
            .width(Length::Fill);

        widget::container(row)
            .width(Length::Fill)
            .padding([spacing.space_xs, 0])
            .into()
    }
}

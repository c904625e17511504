// SPDX-License-Identifier: GPL-3.0-only

//! Capture control widgets
//!
//! Shutter and record buttons, the facing flip, zoom controls, the
//! recording indicator and the transient notice banner.

use crate::app::state::{AppModel, Message};
use crate::app::view::overlay_container_style;
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget::{self, icon};

/// Camera switch icon SVG (camera with circular arrows)
const CAMERA_SWITCH_ICON: &[u8] = include_bytes!("../../resources/button_icons/camera-switch.svg");

impl AppModel {
    /// Build the photo shutter button
    ///
    /// White circle that briefly grays out and shrinks while the shutter
    /// overlay is up. Not pressable while a clip is recording.
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let shutter_color = if self.shutter_active {
            Color::from_rgb(0.7, 0.7, 0.7) // Gray while the shutter overlay is up
        } else {
            Color::WHITE
        };

        // Press down effect while capturing
        let (inner_size, outer_size) = if self.shutter_active {
            (
                ui::CAPTURE_BUTTON_INNER * 0.85,
                ui::CAPTURE_BUTTON_OUTER * 0.85,
            )
        } else {
            (ui::CAPTURE_BUTTON_INNER, ui::CAPTURE_BUTTON_OUTER)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(shutter_color)),
            border: cosmic::iced::Border {
                radius: [ui::CAPTURE_BUTTON_RADIUS * (inner_size / ui::CAPTURE_BUTTON_INNER); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        // Photo requests are dropped while recording, so the button only
        // presses when idle
        let mut button = widget::button::custom(button_inner)
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        if !self.recording.is_recording() {
            button = button.on_press(Message::CapturePhoto);
        }

        // Wrap button in a fixed-size container to prevent layout shift when it shrinks
        let button_wrapper = widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_x(ui::CAPTURE_BUTTON_OUTER)
            .center_y(ui::CAPTURE_BUTTON_OUTER);

        widget::container(button_wrapper)
            .padding([spacing.space_xs, 0])
            .into()
    }

    /// Build the record toggle button
    ///
    /// Red circle that darkens and shrinks while recording. Pressing it
    /// starts a clip when idle and stops the running one otherwise.
    pub fn build_record_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let is_recording = self.recording.is_recording();

        let record_color = if is_recording {
            Color::from_rgb(0.6, 0.05, 0.05) // Darker red while recording
        } else {
            Color::from_rgb(0.9, 0.1, 0.1)
        };

        let (inner_size, outer_size) = if is_recording {
            (
                ui::CAPTURE_BUTTON_INNER * 0.70,
                ui::CAPTURE_BUTTON_OUTER * 0.70,
            )
        } else {
            (ui::CAPTURE_BUTTON_INNER, ui::CAPTURE_BUTTON_OUTER)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(record_color)),
            border: cosmic::iced::Border {
                radius: [ui::CAPTURE_BUTTON_RADIUS * (inner_size / ui::CAPTURE_BUTTON_INNER); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let button = widget::button::custom(button_inner)
            .on_press(Message::ToggleRecording)
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        // Wrap button in a fixed-size container to prevent layout shift when it shrinks
        let button_wrapper = widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_x(ui::CAPTURE_BUTTON_OUTER)
            .center_y(ui::CAPTURE_BUTTON_OUTER);

        widget::container(button_wrapper)
            .padding([spacing.space_xs, 0])
            .into()
    }

    /// Build the facing flip button
    pub fn build_flip_button(&self) -> Element<'_, Message> {
        let switch_icon = widget::icon::from_svg_bytes(CAMERA_SWITCH_ICON).symbolic(true);

        // Create icon widget that inherits theme colors
        let icon_widget = widget::icon(switch_icon).size(32);

        // Center icon in fixed-size container
        let icon_content = widget::container(icon_widget)
            .width(Length::Fixed(ui::FLIP_BUTTON_EDGE))
            .height(Length::Fixed(ui::FLIP_BUTTON_EDGE))
            .center(Length::Fixed(ui::FLIP_BUTTON_EDGE));

        // Use Button::Text for theme-aware styling (transparent background, themed icon color)
        let button = widget::button::custom(icon_content)
            .padding(0)
            .class(cosmic::theme::Button::Text)
            .on_press(Message::FlipFacing);

        // Wrap in container with themed background for better visibility on camera preview
        widget::container(button).style(overlay_container_style).into()
    }

    /// Build the zoom controls row
    ///
    /// Out and in buttons around the current normalized zoom level. The
    /// label sits in a fixed-width slot so single presses never shift the
    /// buttons sideways.
    pub fn build_zoom_controls(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let label = widget::container(
            widget::text(format!("{:.1}", self.settings.zoom)).size(ui::ZOOM_LABEL_TEXT_SIZE),
        )
        .width(Length::Fixed(ui::ZOOM_LABEL_WIDTH))
        .center_x(ui::ZOOM_LABEL_WIDTH);

        let row = widget::row()
            .push(
                widget::button::icon(icon::from_name("zoom-out-symbolic"))
                    .on_press(Message::ZoomOut)
                    .class(cosmic::theme::Button::Text),
            )
            .push(label)
            .push(
                widget::button::icon(icon::from_name("zoom-in-symbolic"))
                    .on_press(Message::ZoomIn)
                    .class(cosmic::theme::Button::Text),
            )
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center);

        widget::container(row)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Build the recording indicator and timer widget
    ///
    /// Shows a red dot, the REC label and elapsed time while recording.
    /// Returns None when idle.
    pub fn build_recording_indicator<'a>(&self) -> Option<Element<'a, Message>> {
        if !self.recording.is_recording() {
            return None;
        }

        let spacing = cosmic::theme::spacing();

        let mut row = widget::row()
            .align_y(Alignment::Center)
            .spacing(spacing.space_xxs);

        // Red recording dot
        let red_dot =
            widget::container(widget::Space::new(Length::Fixed(12.0), Length::Fixed(12.0))).style(
                |_theme| widget::container::Style {
                    background: Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0))),
                    border: cosmic::iced::Border {
                        radius: [6.0; 4].into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            );

        row = row.push(red_dot);
        row = row.push(widget::text(fl!("recording-indicator")).size(14));

        let elapsed = self.recording.elapsed_secs();
        let minutes = elapsed / 60;
        let seconds = elapsed % 60;
        let duration_text = format!("{:02}:{:02}", minutes, seconds);

        row = row.push(widget::horizontal_space().width(spacing.space_xxs));
        row = row.push(widget::text(duration_text).size(14));

        Some(row.into())
    }

    /// Build the transient notice banner
    ///
    /// Returns None when no notice is up. Failure notices render with a
    /// reddish text color on the same translucent backdrop.
    pub fn build_notice_banner(&self) -> Option<Element<'_, Message>> {
        let notice = self.notice.as_ref()?;

        let text_color = if notice.is_error {
            Color::from_rgb(1.0, 0.45, 0.45)
        } else {
            Color::WHITE
        };

        let banner = widget::container(
            widget::text(notice.text.clone()).size(ui::NOTICE_TEXT_SIZE),
        )
        .padding([4, 12])
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                ui::OVERLAY_BACKGROUND_ALPHA,
            ))),
            text_color: Some(text_color),
            border: cosmic::iced::Border {
                radius: [8.0; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        });

        Some(banner.into())
    }
}

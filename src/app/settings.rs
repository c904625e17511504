// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::capture::CameraFacing;
use crate::config::AppTheme;
use crate::constants::{app_info, library};
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Appearance and library preferences plus the diagnostics shortcuts.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Theme selection dropdown
        let theme_index = match self.config.app_theme {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        };
        let theme_dropdown = widget::dropdown(
            &self.app_theme_options,
            Some(theme_index),
            Message::SetAppTheme,
        );

        // Startup facing dropdown
        let facing_index = CameraFacing::ALL
            .iter()
            .position(|facing| *facing == self.config.default_facing);
        let facing_dropdown =
            widget::dropdown(&self.facing_options, facing_index, Message::SetDefaultFacing);

        // Library folder input, applied with the button next to it
        let folder_input = widget::text_input(library::DEFAULT_FOLDER, &self.folder_name_input)
            .on_input(Message::FolderNameEdited);

        let folder_row = widget::row()
            .push(folder_input)
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(widget::button::standard(fl!("apply")).on_press(Message::ApplyFolderName))
            .align_y(cosmic::iced::Alignment::Center)
            .spacing(0);

        // Diagnostics report buttons
        let report_button =
            widget::button::standard(fl!("generate-report")).on_press(Message::GenerateReport);

        // Show report button (only once a report was generated)
        let report_row = if self.last_report_path.is_some() {
            let show_report_button =
                widget::button::standard(fl!("show-report")).on_press(Message::ShowReport);

            widget::row()
                .push(report_button)
                .push(widget::horizontal_space().width(spacing.space_xs))
                .push(show_report_button)
                .spacing(0)
        } else {
            widget::row().push(report_button).spacing(0)
        };

        // About page link and issue tracker shortcut
        let about_row = widget::row()
            .push(
                widget::button::standard(fl!("about"))
                    .on_press(Message::ToggleContextPage(ContextPage::About)),
            )
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(
                widget::button::standard(fl!("report-an-issue"))
                    .on_press(Message::LaunchUrl(self.config.bug_report_url.clone())),
            )
            .spacing(0);

        // Version info string
        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        // Build settings column
        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("appearance"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("theme")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("library"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("library-folder")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(folder_row)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("default-facing")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(facing_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("diagnostics"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(report_row)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(about_row)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}

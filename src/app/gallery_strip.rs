// SPDX-License-Identifier: GPL-3.0-only

//! Gallery strip widget
//!
//! Horizontal row of the most recent captures shown under the capture
//! controls, with a trailing tile that opens the library folder.

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::fl;
use crate::library::{Asset, MediaKind};
use cosmic::Element;
use cosmic::iced::widget::scrollable::{Direction, Scrollbar};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the horizontal strip of recent captures
    ///
    /// Newest asset first. Tiles open their asset externally; assets whose
    /// thumbnail is still decoding (or failed to decode) show a kind
    /// placeholder instead.
    pub fn build_gallery_strip(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        if self.assets.is_empty() {
            return widget::container(widget::text(fl!("no-assets")).size(ui::NOTICE_TEXT_SIZE))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding([spacing.space_xs, 0])
                .into();
        }

        let mut row = widget::row()
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center);

        for asset in &self.assets {
            row = row.push(self.build_strip_tile(asset));
        }

        // Trailing shortcut into the library folder itself
        row = row.push(self.build_library_tile());

        let strip = cosmic::iced::widget::scrollable(row)
            .direction(Direction::Horizontal(Scrollbar::new()))
            .width(Length::Fill);

        widget::container(strip)
            .width(Length::Fill)
            .padding([spacing.space_xxs, spacing.space_xs])
            .into()
    }

    /// Build one thumbnail tile for an asset
    fn build_strip_tile(&self, asset: &Asset) -> Element<'_, Message> {
        let tile: Element<'_, Message> = match self.thumbnails.get(&asset.path) {
            Some(thumbnail) => widget::image::Image::new(thumbnail.clone())
                .content_fit(cosmic::iced::ContentFit::Cover)
                .width(Length::Fixed(ui::STRIP_THUMB_EDGE))
                .height(Length::Fixed(ui::STRIP_THUMB_EDGE))
                .into(),
            None => {
                let icon_name = match asset.kind {
                    MediaKind::Photo => "image-x-generic-symbolic",
                    MediaKind::Video => "video-x-generic-symbolic",
                };
                widget::container(icon::from_name(icon_name).size(24))
                    .width(Length::Fixed(ui::STRIP_THUMB_EDGE))
                    .height(Length::Fixed(ui::STRIP_THUMB_EDGE))
                    .center(Length::Fixed(ui::STRIP_THUMB_EDGE))
                    .into()
            }
        };

        widget::button::custom(tile)
            .padding(0)
            .class(cosmic::theme::Button::Image)
            .on_press(Message::OpenAsset(asset.path.clone()))
            .into()
    }

    /// Build the trailing open-library tile
    fn build_library_tile(&self) -> Element<'_, Message> {
        let content = widget::container(icon::from_name("folder-pictures-symbolic").size(24))
            .width(Length::Fixed(ui::STRIP_THUMB_EDGE))
            .height(Length::Fixed(ui::STRIP_THUMB_EDGE))
            .center(Length::Fixed(ui::STRIP_THUMB_EDGE));

        widget::button::custom(content)
            .padding(0)
            .class(cosmic::theme::Button::Image)
            .on_press(Message::OpenLibraryFolder)
            .into()
    }
}

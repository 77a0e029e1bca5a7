// SPDX-License-Identifier: MPL-2.0
//! Rendering for the demo viewer.
//!
//! Everything here reads a [`Controls`] snapshot and the mirrored
//! [`HostState`](super::platform::HostState); no lightbox state is mutated
//! while building the view.

use super::platform::ZoomView;
use super::Message;
use crate::domain::gallery::{Collection, Item};
use crate::infrastructure::download::is_remote;
use crate::lightbox::{self, Controls};
use iced::widget::image::{self, Handle};
use iced::widget::{button, column, container, row, text, Space};
use iced::{alignment, Border, Color, Element, Length, Theme};

/// Thumbnails shown on each side of the current item.
const THUMBNAIL_RADIUS: usize = 3;

/// Resolution of the progress bar split.
const PROGRESS_STEPS: u16 = 1_000;

/// Fallbacks used when a configured CSS value cannot be parsed.
const FALLBACK_BUTTON_SIZE: f32 = 40.0;
const FALLBACK_BAR_HEIGHT: f32 = 3.0;

/// Everything [`view`] needs for one frame.
pub struct ViewContext<'a> {
    pub controls: Option<Controls<'a>>,
    pub collection: &'a Collection,
    pub zoom: Option<&'a ZoomView>,
    pub bar_background: &'a str,
    pub bar_fill: &'a str,
    pub bar_height: &'a str,
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.controls {
        Some(ref controls) => lightbox_view(&ctx, controls),
        None => closed_view(ctx.collection, ctx.status),
    }
}

fn lightbox_view<'a>(ctx: &ViewContext<'a>, controls: &Controls<'a>) -> Element<'a, Message> {
    let overlay = parse_color(&controls.settings.overlay_color).unwrap_or(Color::BLACK);

    let toolbar: Element<'a, Message> = if controls.idle {
        Space::new().height(Length::Fixed(button_size(controls))).into()
    } else {
        toolbar(controls)
    };

    let mut content = column![toolbar, stage(controls.current, ctx.zoom)]
        .spacing(8)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(caption) = controls.current.and_then(|item| item.caption.as_deref()) {
        content = content.push(
            container(text(caption.to_owned()).color(Color::WHITE))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );
    }

    if !controls.idle {
        content = content.push(thumbnails(ctx.collection, controls.current));
    }

    if let Some(progress) = controls.progress {
        let height = parse_px(ctx.bar_height).unwrap_or(FALLBACK_BAR_HEIGHT);
        let background = parse_color(ctx.bar_background).unwrap_or(Color::WHITE);
        let fill = parse_color(ctx.bar_fill).unwrap_or(Color::BLACK);
        content = content.push(progress_bar(progress.fraction(), height, background, fill));
    }

    if let Some(status) = ctx.status {
        content = content.push(text(status.to_owned()).size(12).color(Color::WHITE));
    }

    container(content)
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(overlay.into()),
            ..Default::default()
        })
        .into()
}

fn toolbar<'a>(controls: &Controls<'a>) -> Element<'a, Message> {
    let layout = &controls.buttons;
    let background = parse_color(&layout.background_color).unwrap_or(Color::BLACK);
    let icon = parse_color(&layout.icon_color).unwrap_or(Color::WHITE);
    let size = button_size(controls);
    let padding = parse_px(&layout.icon_padding).unwrap_or(0.0);

    let control = |label: &'static str, message: lightbox::Message| {
        button(
            container(text(label).color(icon).size(size * 0.35))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .padding(padding)
        .height(Length::Fixed(size))
        .on_press(Message::Lightbox(message))
        .style(move |_theme: &Theme, _status| button::Style {
            background: Some(background.into()),
            text_color: icon,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..button::Style::default()
        })
    };

    let mut bar = row![
        control("Prev", lightbox::Message::Previous),
        control("Next", lightbox::Message::Next),
        if controls.autoplay {
            control("Pause", lightbox::Message::SetAutoplay(false))
        } else {
            control("Play", lightbox::Message::SetAutoplay(true))
        },
    ]
    .spacing(6)
    .align_y(alignment::Vertical::Center);

    if !controls.settings.disable_panzoom {
        bar = bar.push(if controls.zoom {
            control("Zoom out", lightbox::Message::SetZoom(false))
        } else {
            control("Zoom in", lightbox::Message::SetZoom(true))
        });
    }

    bar.push(control("Fullscreen", lightbox::Message::RequestFullscreen))
        .push(control("Download", lightbox::Message::Download))
        .push(Space::new().width(Length::Fill))
        .push(control("Close", lightbox::Message::Close))
        .into()
}

fn stage<'a>(current: Option<&'a Item>, zoom: Option<&'a ZoomView>) -> Element<'a, Message> {
    let Some(item) = current else {
        return centered(text("No image").color(Color::WHITE));
    };
    if is_remote(&item.source) {
        return centered(text(item.source.clone()).color(Color::WHITE));
    }

    let handle = Handle::from_path(&item.source);
    match zoom.filter(|view| view.item == item.id) {
        Some(view) => centered(
            image::Viewer::new(handle)
                .min_scale(view.min_zoom)
                .max_scale(view.max_zoom)
                .width(Length::Fill)
                .height(Length::Fill),
        ),
        None => centered(iced::widget::image(handle)),
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn thumbnails<'a>(collection: &'a Collection, current: Option<&Item>) -> Element<'a, Message> {
    let index = current
        .and_then(|item| collection.iter().position(|candidate| candidate.id == item.id))
        .unwrap_or(0);
    let start = index.saturating_sub(THUMBNAIL_RADIUS);
    let end = (index + THUMBNAIL_RADIUS + 1).min(collection.len());
    let current_id = current.map(|item| &item.id);

    let strip = collection.as_slice()[start..end]
        .iter()
        .fold(row![].spacing(4), |strip, item| {
            strip.push(thumbnail(item, current_id == Some(&item.id)))
        });

    container(strip)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn thumbnail(item: &Item, selected: bool) -> Element<'_, Message> {
    let label = item.caption.clone().unwrap_or_else(|| item.id.to_string());
    button(text(label).size(12))
        .on_press(Message::Lightbox(lightbox::Message::SelectItem(
            item.id.clone(),
        )))
        .style(if selected {
            button::primary
        } else {
            button::secondary
        })
        .into()
}

fn progress_bar<'a>(
    fraction: f32,
    height: f32,
    background: Color,
    fill: Color,
) -> Element<'a, Message> {
    let segment = |color: Color, portion: u16| {
        container(Space::new())
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(height))
            .style(move |_theme: &Theme| container::Style {
                background: Some(color.into()),
                ..Default::default()
            })
    };

    let filled = (fraction.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    let remaining = PROGRESS_STEPS - filled;
    match (filled, remaining) {
        (0, _) => segment(background, PROGRESS_STEPS).into(),
        (_, 0) => segment(fill, PROGRESS_STEPS).into(),
        _ => row![segment(fill, filled), segment(background, remaining)].into(),
    }
}

fn closed_view<'a>(collection: &'a Collection, status: Option<&'a str>) -> Element<'a, Message> {
    let mut content = column![text("Lightbox closed").size(20)].spacing(8);

    if collection.is_empty() {
        content = content.push(text("No images to show."));
    }
    for item in collection.iter() {
        content = content
            .push(button(text(item.id.to_string())).on_press(Message::Open(item.id.clone())));
    }
    if let Some(status) = status {
        content = content.push(text(status.to_owned()).size(12));
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn button_size(controls: &Controls<'_>) -> f32 {
    parse_px(&controls.buttons.size).unwrap_or(FALLBACK_BUTTON_SIZE)
}

/// Parses a CSS pixel length such as `"40px"` or `"3"`.
fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().ok().filter(|px| px.is_finite() && *px >= 0.0)
}

/// Parses the CSS color forms used in the options: `#rgb`, `#rrggbb`,
/// `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (body, with_alpha) = if let Some(body) = value.strip_prefix("rgba(") {
        (body, true)
    } else if let Some(body) = value.strip_prefix("rgb(") {
        (body, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = body.strip_suffix(')')?.split(',').map(str::trim).collect();

    let channel = |part: &str| part.parse::<u8>().ok();
    match (with_alpha, parts.as_slice()) {
        (false, [r, g, b]) => Some(Color::from_rgb8(channel(r)?, channel(g)?, channel(b)?)),
        (true, [r, g, b, a]) => {
            let alpha = a.parse::<f32>().ok()?.clamp(0.0, 1.0);
            Some(Color::from_rgba8(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    match hex.len() {
        3 => {
            let short = |i: usize| digit(i..i + 1).map(|d| d * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(Color::from_rgb8(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
        8 => Some(Color::from_rgba8(
            digit(0..2)?,
            digit(2..4)?,
            digit(4..6)?,
            f32::from(digit(6..8)?) / 255.0,
        )),
        _ => None,
    }
}

use super::model::{SlotGeometry, Stage};
use super::{ICON_INACTIVE_ALPHA, ICON_SIZE, MARKER_RADIUS};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

struct SlotRenderer<'a> {
    title: &'a str,
    picture: Option<&'a Pixbuf>,
    geometry: SlotGeometry,
    active: bool,
}

impl<'a> SlotRenderer<'a> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_circle(cr, colors)?;
        match self.picture {
            Some(pixbuf) => self.draw_picture(cr, pixbuf),
            None => self.draw_title(cr, colors),
        }
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let color = if self.active {
            colors.active
        } else {
            colors.idle
        };
        set_source(cr, color);
        cr.arc(
            self.geometry.center.x,
            self.geometry.center.y,
            self.geometry.radius,
            0.0,
            2.0 * PI,
        );
        cr.fill()
    }

    fn draw_picture(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        // fit picture into the slot, clipped to its circle
        let scale = (self.geometry.radius * 2.0 * 0.85) / ICON_SIZE as f64;
        let (w, h) = (
            pixbuf.width() as f64 * scale,
            pixbuf.height() as f64 * scale,
        );

        cr.save()?;
        cr.arc(
            self.geometry.center.x,
            self.geometry.center.y,
            self.geometry.radius * 0.9,
            0.0,
            2.0 * PI,
        );
        cr.clip();
        cr.translate(
            self.geometry.center.x - w / 2.0,
            self.geometry.center.y - h / 2.0,
        );
        cr.scale(scale, scale);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        if self.active {
            cr.paint()?;
        } else {
            cr.paint_with_alpha(ICON_INACTIVE_ALPHA)?;
        }
        cr.restore()
    }

    fn draw_title(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, colors.text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size((self.geometry.radius / 3.5).max(8.0));

        let initials: String = self
            .title
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        if let Ok(ext) = cr.text_extents(&initials) {
            cr.move_to(
                self.geometry.center.x - ext.width() / 2.0 - ext.x_bearing(),
                self.geometry.center.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            cr.show_text(&initials)?;
        }
        Ok(())
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, stage: &Stage, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_ring(cr, stage, colors)?;
    draw_marker(cr, stage, colors)?;

    // active item last so it sits on top of its neighbours
    let count = stage.layout.count();
    let order = (0..count)
        .filter(|&i| !stage.scene.is_active(i))
        .chain(stage.scene.active.filter(|&i| i < count));

    for i in order {
        SlotRenderer {
            title: stage.titles.get(i).map(String::as_str).unwrap_or_default(),
            picture: stage.pictures.get(i).and_then(Option::as_ref),
            geometry: stage.slot_geometry(i),
            active: stage.scene.is_active(i),
        }
        .draw(cr, colors)?;
    }
    Ok(())
}

fn draw_ring(cr: &Context, stage: &Stage, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.ring);
    cr.set_line_width(2.0);
    cr.arc(
        stage.center.x,
        stage.center.y,
        stage.ring_radius,
        0.0,
        2.0 * PI,
    );
    cr.stroke()
}

fn draw_marker(cr: &Context, stage: &Stage, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let at = stage.marker_position();
    set_source(cr, colors.marker);
    cr.arc(at.x, at.y, MARKER_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}

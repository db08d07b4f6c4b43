use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Ring colours, resolved from the running GTK theme.
pub struct ThemeColors {
    pub active: Srgba<f64>,
    pub idle: Srgba<f64>,
    pub ring: Srgba<f64>,
    pub marker: Srgba<f64>,
    pub text: Srgba<f64>,
}

/// A named theme colour with its fallback. `alpha` replaces the theme's own alpha when set.
struct Swatch {
    name: &'static str,
    fallback: (f64, f64, f64, f64),
    alpha: Option<f64>,
}

impl Swatch {
    const fn new(name: &'static str, fallback: (f64, f64, f64, f64), alpha: Option<f64>) -> Self {
        Self {
            name,
            fallback,
            alpha,
        }
    }

    fn resolve(&self, context: &gtk::StyleContext) -> Srgba<f64> {
        let (r, g, b, a) = context
            .lookup_color(self.name)
            .map(|c| {
                (
                    f64::from(c.red()),
                    f64::from(c.green()),
                    f64::from(c.blue()),
                    f64::from(c.alpha()),
                )
            })
            .unwrap_or(self.fallback);
        Srgba::new(r, g, b, self.alpha.unwrap_or(a))
    }
}

const ACTIVE: Swatch = Swatch::new("theme_selected_bg_color", (0.4, 0.4, 0.8, 0.95), Some(0.95));
const IDLE: Swatch = Swatch::new("theme_unfocused_bg_color", (0.2, 0.2, 0.2, 0.8), Some(0.8));
const RING: Swatch = Swatch::new("theme_fg_color", (0.5, 0.5, 0.5, 0.15), Some(0.15));
const MARKER: Swatch = Swatch::new("accent_color", (0.4, 0.4, 0.8, 0.9), Some(0.9));
const TEXT: Swatch = Swatch::new("theme_fg_color", (1.0, 1.0, 1.0, 1.0), None);

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            active: ACTIVE.resolve(context),
            idle: IDLE.resolve(context),
            ring: RING.resolve(context),
            marker: MARKER.resolve(context),
            text: TEXT.resolve(context),
        }
    }
}

// Panel fields fade through CSS transitions on the `faded` class.
const STYLESHEET: &str = "
.orbit-drawing-area {
    background: none;
    background-color: transparent;
}

.orbit-panel {
    margin-bottom: 32px;
}

.orbit-field {
    opacity: 1;
    margin-top: 0px;
    transition: opacity 400ms ease-out, margin-top 400ms ease-out;
}

.orbit-field.faded {
    opacity: 0;
    margin-top: 20px;
}

.orbit-title {
    font-size: 22pt;
    font-weight: bold;
}

.orbit-description {
    font-size: 12pt;
}
";

pub fn load_css() {
    let Some(display) = gdk::Display::default() else {
        log::warn!("No display, skipping stylesheet");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(STYLESHEET);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

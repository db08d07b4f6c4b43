use crate::config::{self, Config, SETUP_LINK};
use crate::events::AppEvent;
use crate::gui::scheduler::GlibScheduler;
use crate::gui::stage::{self, Point, Stage};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use orbit_core::command::Request;
use orbit_core::gallery::{Gallery, NavKey};
use orbit_core::options::OptionsPatch;
use orbit_core::panel::PanelField;
use orbit_core::registry::{GalleryId, Registry};
use orbit_core::surface::Scene;
use orbit_core::timer::Timer;
use parking_lot::Mutex;
use relm4::prelude::*;
use std::cell::RefCell;
use std::ffi::OsStr;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

pub type HostGallery = Gallery<Scene, GlibScheduler>;

pub struct AppInit {
    pub id: GalleryId,
    pub gallery: Arc<Mutex<HostGallery>>,
    pub config: Config,
    pub rx: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    id: GalleryId,
    gallery: Arc<Mutex<HostGallery>>,
    config: Config,
    /// Last scene pulled from the gallery; drives the panel bindings.
    scene: Scene,
    stage: Rc<RefCell<Stage>>,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Timer(Timer),
    Command(Request),
    ConfigReload,
    Key(NavKey),
    Focused,
    Previous,
    Next,
    Click(Point),
    Activate,
    Resize(f64, f64),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Command(request) => AppMsg::Command(request),
            AppEvent::Timer(timer) => AppMsg::Timer(timer),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Orbit"),
            add_css_class: "orbit-window",

            connect_is_active_notify[sender] => move |window| {
                if window.is_active() {
                    sender.input(AppMsg::Focused);
                }
            },

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    let nav = match key {
                        gtk::gdk::Key::Left => NavKey::ArrowLeft,
                        gtk::gdk::Key::Right => NavKey::ArrowRight,
                        _ => return glib::Propagation::Proceed,
                    };
                    sender.input(AppMsg::Key(nav));
                    glib::Propagation::Stop
                }
            },

            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "orbit-drawing-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width as f64, height as f64));
                    },

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Click(Point::new(x, y)));
                        }
                    }
                },

                add_overlay = &gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_valign: gtk::Align::End,
                    set_halign: gtk::Align::Center,
                    set_spacing: 8,
                    add_css_class: "orbit-panel",

                    gtk::Label {
                        set_css_classes: &["orbit-field", "orbit-title"],
                        #[watch]
                        set_label: &model.scene.panel.title,
                        #[watch]
                        set_class_active: ("faded", !model.scene.is_visible(PanelField::Title)),
                    },

                    gtk::Label {
                        set_css_classes: &["orbit-field", "orbit-description"],
                        set_wrap: true,
                        set_max_width_chars: 48,
                        set_justify: gtk::Justification::Center,
                        #[watch]
                        set_label: &model.scene.panel.description,
                        #[watch]
                        set_class_active: ("faded", !model.scene.is_visible(PanelField::Description)),
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_halign: gtk::Align::Center,
                        set_spacing: 12,

                        gtk::Button {
                            set_icon_name: "go-previous-symbolic",
                            connect_clicked[sender] => move |_| {
                                sender.input(AppMsg::Previous);
                            }
                        },

                        gtk::Button {
                            add_css_class: "orbit-field",
                            #[watch]
                            set_label: &model.scene.panel.button,
                            #[watch]
                            set_visible: !model.scene.panel.button.is_empty(),
                            #[watch]
                            set_class_active: ("faded", !model.scene.is_visible(PanelField::Button)),
                            connect_clicked[sender] => move |_| {
                                sender.input(AppMsg::Activate);
                            }
                        },

                        gtk::Button {
                            set_icon_name: "go-next-symbolic",
                            connect_clicked[sender] => move |_| {
                                sender.input(AppMsg::Next);
                            }
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            id,
            gallery,
            config,
            rx,
        } = init;

        theme::load_css();
        window::init_window(&root, &config.window);

        let (scene, layout, items) = {
            let gallery = gallery.lock();
            (
                gallery.surface().clone(),
                gallery.layout(),
                gallery.items().to_vec(),
            )
        };
        let stage = Rc::new(RefCell::new(Stage::new(&items, layout, scene.clone())));

        let model = AppModel {
            id,
            gallery,
            config,
            scene,
            stage,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let stage_draw = model.stage.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = stage::draw(cr, &stage_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Timer(timer) => self.gallery.lock().on_timer(timer),
            AppMsg::Command(request) => {
                Registry::global().dispatch(&request);
            }
            AppMsg::Key(key) => {
                Registry::global().route_key(key);
            }
            AppMsg::Focused => Registry::global().focus(self.id),
            AppMsg::Previous => self.gallery.lock().previous(),
            AppMsg::Next => self.gallery.lock().next(),
            AppMsg::Click(point) => {
                let hit = self.stage.borrow().hit_test(point);
                if let Some(index) = hit {
                    self.gallery.lock().select(index);
                }
            }
            AppMsg::Activate => self.activate_current(),
            AppMsg::Resize(width, height) => {
                let compact_below = {
                    let mut gallery = self.gallery.lock();
                    gallery.resize(width);
                    gallery.options().small_mobile_breakpoint
                };
                self.stage.borrow_mut().resize(width, height, compact_below);
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => self.reload_config(),
        }
        self.refresh();
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        Registry::global().dispose(self.id);
    }
}

impl AppModel {
    /// Pulls the gallery's scene into the model and the stage when it changed.
    fn refresh(&mut self) {
        let (scene, layout, transition) = {
            let gallery = self.gallery.lock();
            let scene = gallery.surface();
            if scene.revision == self.scene.revision {
                return;
            }
            (
                scene.clone(),
                gallery.layout(),
                gallery.options().transition_speed,
            )
        };

        let animate = self
            .stage
            .borrow_mut()
            .sync(&scene, layout, transition, Instant::now());
        self.scene = scene;

        if animate {
            self.start_frame_clock();
        }
        self.drawing_area.queue_draw();
    }

    fn start_frame_clock(&self) {
        if !self.stage.borrow_mut().claim_ticking() {
            return;
        }
        let stage = self.stage.clone();
        self.drawing_area.add_tick_callback(move |area, _| {
            let mut stage = stage.borrow_mut();
            let more = stage.advance(Instant::now());
            area.queue_draw();
            if more {
                glib::ControlFlow::Continue
            } else {
                stage.release_ticking();
                glib::ControlFlow::Break
            }
        });
    }

    fn activate_current(&self) {
        let (index, title) = {
            let gallery = self.gallery.lock();
            (gallery.state().current_index, gallery.current_item().title.clone())
        };
        match self.config.link(index) {
            Some(SETUP_LINK) => match config::write_default_config() {
                Ok(path) => open_external(&path),
                Err(e) => log::error!("Failed to write default config: {}", e),
            },
            Some(link) => open_external(link),
            None => log::debug!("'{}' has no link", title),
        }
    }

    fn reload_config(&mut self) {
        match config::load_config() {
            Ok(new_config) => {
                self.gallery
                    .lock()
                    .update_options(&OptionsPatch::from(new_config.gallery.clone()));
                if !new_config.items.is_empty() && new_config.items != self.config.items {
                    log::warn!("Item changes take effect after a restart");
                }
                self.config.gallery = new_config.gallery;
                self.drawing_area.queue_draw();
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}

fn open_external(target: impl AsRef<OsStr>) {
    let target = target.as_ref();
    if let Err(e) = std::process::Command::new("xdg-open").arg(target).spawn() {
        log::error!("Failed to open {:?}: {}", target, e);
    }
}

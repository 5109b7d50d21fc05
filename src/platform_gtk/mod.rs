use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ChartDemoState, DemoConfig, build_frame_for_viewport};
use crate::core::{ChartKind, Viewport};
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, CairoRenderer};

pub const WINDOW_TITLE: &str = "Animation Chart's";
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// GTK surface for one [`ChartDemoState`].
///
/// Owns the widgets of the demo screen: a "Chart Type" segmented control, a
/// "Demo" section with the chart drawing area inside a scrollable list, and a
/// trailing header-bar "Trigger" button. The state's virtual clock follows
/// wall time since construction and is driven from the GTK main loop, so
/// every mutation stays on the GTK thread.
pub struct GtkChartDemo {
    state: Rc<RefCell<ChartDemoState>>,
    clock_origin: Instant,
    drawing_area: gtk::DrawingArea,
    root: gtk::ScrolledWindow,
    trigger_button: gtk::Button,
}

impl GtkChartDemo {
    pub fn new(config: DemoConfig) -> ChartResult<Self> {
        let (width, height) = config.viewport.surface_size()?;
        let state = Rc::new(RefCell::new(ChartDemoState::new(config)?));
        let clock_origin = Instant::now();
        let renderer = Rc::new(RefCell::new(CairoRenderer::new(width, height)?));

        let drawing_area = gtk::DrawingArea::builder()
            .content_height(height)
            .content_width(width)
            .hexpand(true)
            .build();
        install_draw_func(&drawing_area, Rc::clone(&state), renderer);

        {
            let weak_area = drawing_area.downgrade();
            state.borrow_mut().subscribe(move |_mask| {
                if let Some(area) = weak_area.upgrade() {
                    area.queue_draw();
                }
            });
        }

        let segmented = build_segmented_control(Rc::clone(&state), clock_origin);
        let trigger_button = gtk::Button::with_label("Trigger");
        {
            let state = Rc::clone(&state);
            trigger_button.connect_clicked(move |_| {
                if let Ok(mut demo) = state.try_borrow_mut() {
                    demo.advance_to(clock_origin.elapsed());
                    demo.trigger();
                }
            });
        }

        let list = gtk::Box::new(gtk::Orientation::Vertical, 8);
        list.set_margin_top(12);
        list.set_margin_bottom(12);
        list.set_margin_start(12);
        list.set_margin_end(12);
        list.append(&section_heading("Chart Type"));
        list.append(&segmented);
        list.append(&section_heading("Demo"));
        list.append(&drawing_area);

        let root = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&list)
            .build();

        Ok(Self {
            state,
            clock_origin,
            drawing_area,
            root,
            trigger_button,
        })
    }

    #[must_use]
    pub fn state(&self) -> Rc<RefCell<ChartDemoState>> {
        Rc::clone(&self.state)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn root(&self) -> &gtk::ScrolledWindow {
        &self.root
    }

    #[must_use]
    pub fn trigger_button(&self) -> &gtk::Button {
        &self.trigger_button
    }

    /// Starts the frame timer and fires the first-appearance reveal.
    ///
    /// The timer only advances the state while reveals or transitions are in
    /// flight; user actions catch the clock up before mutating.
    pub fn start(&self) {
        let origin = self.clock_origin;
        {
            let state = Rc::clone(&self.state);
            gtk::glib::timeout_add_local(FRAME_INTERVAL, move || {
                if let Ok(mut demo) = state.try_borrow_mut() {
                    if demo.needs_animation_frame() {
                        demo.advance_to(origin.elapsed());
                    }
                }
                gtk::glib::ControlFlow::Continue
            });
        }
        let mut demo = self.state.borrow_mut();
        demo.advance_to(origin.elapsed());
        demo.on_appear();
    }
}

/// Builds the demo window for `app` and starts the reveal.
pub fn present_demo_window(app: &gtk::Application, config: DemoConfig) -> ChartResult<()> {
    let demo = GtkChartDemo::new(config)?;

    let header = gtk::HeaderBar::new();
    header.pack_end(demo.trigger_button());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(420)
        .default_height(480)
        .build();
    window.set_titlebar(Some(&header));
    window.set_child(Some(demo.root()));
    window.present();
    demo.start();
    Ok(())
}

fn install_draw_func(
    drawing_area: &gtk::DrawingArea,
    state: Rc<RefCell<ChartDemoState>>,
    renderer: Rc<RefCell<CairoRenderer>>,
) {
    drawing_area.set_draw_func(move |_, context, width, height| {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return;
        };
        let Ok(demo) = state.try_borrow() else {
            return;
        };
        let Ok(mut renderer) = renderer.try_borrow_mut() else {
            return;
        };
        let result = build_frame_for_viewport(&demo, Viewport::new(width, height))
            .and_then(|frame| renderer.render_on_cairo_context(context, &frame));
        if let Err(err) = result {
            warn!(%err, "chart draw failed");
        }
    });
}

fn build_segmented_control(
    state: Rc<RefCell<ChartDemoState>>,
    clock_origin: Instant,
) -> gtk::Box {
    let container = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    container.add_css_class("linked");
    container.set_homogeneous(true);

    let selected = state.borrow().kind();
    let mut first: Option<gtk::ToggleButton> = None;
    for kind in ChartKind::ALL {
        let button = gtk::ToggleButton::with_label(kind.label());
        if let Some(leader) = &first {
            button.set_group(Some(leader));
        }
        button.set_active(kind == selected);
        {
            let state = Rc::clone(&state);
            button.connect_toggled(move |button| {
                if !button.is_active() {
                    return;
                }
                if let Ok(mut demo) = state.try_borrow_mut() {
                    demo.advance_to(clock_origin.elapsed());
                    demo.select_kind(kind);
                }
            });
        }
        container.append(&button);
        if first.is_none() {
            first = Some(button);
        }
    }
    container
}

fn section_heading(text: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.set_xalign(0.0);
    label.add_css_class("heading");
    label
}

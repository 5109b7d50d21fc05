use animated_charts::DemoConfig;
use animated_charts::platform_gtk::present_demo_window;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = animated_charts::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.animated_charts.demo")
        .build();
    app.connect_activate(|app| {
        if let Err(err) = present_demo_window(app, DemoConfig::default()) {
            eprintln!("error: failed to build demo window: {err}");
            app.quit();
        }
    });
    app.run();
}

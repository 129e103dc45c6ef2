use admin_dashboard::app::App;

fn main() {
    console_error_panic_hook::set_once();
    // tracing events fall through to the `log` facade when no subscriber is set
    let _ = console_log::init_with_level(log::Level::Debug);

    tracing::info!("Mounting admin dashboard");
    leptos::mount::mount_to_body(App);
}

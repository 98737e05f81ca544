use leptos::prelude::*;
use smartquiz_ui::App;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Production builds only report errors
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    mount_to_body(App);
}

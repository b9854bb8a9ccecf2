//! Runs the demo cart natively for a few frames.
//!
//! There is no host runtime here, so nothing is drawn. With the `logging`
//! feature and `RUST_LOG=trace`, every primitive call is printed instead.

fn main() {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    demo_cart::boot();
    for _ in 0..3 {
        demo_cart::render();
    }
    log::info!("rendered 3 frames");
}

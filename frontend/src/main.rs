fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting ioniq web");
    yew::Renderer::<ioniq_web::App>::new().render();
}

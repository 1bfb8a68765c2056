fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info).module_prefix("club_signup"));
    yew::Renderer::<club_signup_yew::App>::new().render();
}

use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    dioxus::launch(chipgroups::App);
}

use gigboard_web::App;

fn main() {
    dioxus::launch(App);
}

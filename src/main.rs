fn main() {
    portal_ui::start();
}

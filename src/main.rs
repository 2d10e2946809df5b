fn main() {
    unit_widget_lib::run()
}

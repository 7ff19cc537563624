fn main() {
    fee_admin_frontend::run_app();
}

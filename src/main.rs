fn main() {
    remy::run();
}

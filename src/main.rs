fn main() {
    eatsome_miniapp::run();
}
